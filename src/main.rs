use anyhow::{Context, Result, bail};
use csv::Trim;
use simple_logger::SimpleLogger;
use std::path::PathBuf;
use std::{env, ffi::OsString, fs::File};
use txledger::engine::{InputRecord, Ledger, TransactionSnapshot};

fn main() -> Result<()> {
    SimpleLogger::new().env().init()?;

    log::debug!("Application started");

    log::debug!("Ledger loading: Starting");
    let ledger = load_ledger()?;
    log::debug!("Ledger loading: Done");

    log::debug!("Exporting transaction report to stdout: Started");
    write_report_to_stdout(&ledger)?;
    log::debug!("Exporting transaction report to stdout: Done");

    log::debug!("Application finished");

    Ok(())
}

fn get_first_arg() -> Result<OsString> {
    match env::args_os().nth(1) {
        None => bail!("expected 1 argument, but got none"),
        Some(file_path) => Ok(file_path),
    }
}

fn load_ledger() -> Result<Ledger> {
    let file_path = get_first_arg()?;
    let path = PathBuf::from(file_path);
    log::debug!("Extracted filepath from args: {path:?}");

    load_ledger_from_filepath(&path)
}

fn load_ledger_from_filepath(filepath: &PathBuf) -> Result<Ledger> {
    let file: File =
        File::open(filepath).with_context(|| format!("cannot open {}", filepath.display()))?;

    let mut rdr = csv::ReaderBuilder::new().trim(Trim::All).from_reader(file);

    let mut ledger = Ledger::new();

    log::debug!("Started deserialising records");
    for result in rdr.deserialize::<InputRecord>() {
        log::debug!("Deserialising record into InputRecord: {result:?}");
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Error deserializing record: {e}");
                continue;
            }
        };
        log::debug!("Adding transaction to ledger: {record:?}");
        ledger.add(record.to_transaction());
    }
    Ok(ledger)
}

pub fn write_report_to_stdout(ledger: &Ledger) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());

    log::debug!("Starting transaction snapshot serialisation");
    for tx in ledger.all_ordered_by_amount() {
        log::debug!("Serialising transaction snapshot: {tx}");
        wtr.serialize(TransactionSnapshot::from_transaction(tx))?;
    }

    log::debug!("Transaction snapshot serialisation done -> Flushing to stdout");
    wtr.flush()?;

    Ok(())
}
