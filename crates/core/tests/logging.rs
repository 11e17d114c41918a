use std::sync::Mutex;

use cavegen::{GeneratorConfig, generate};
use log::{Level, LevelFilter, Log, Metadata, Record};

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        RECORDS.lock().unwrap().push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

#[test]
fn entropy_fallback_logs_quietly() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let config = GeneratorConfig { width: 30, height: 30, ..GeneratorConfig::default() };
    let cave = generate(config).expect("valid config");
    assert!(!cave.is_reproducible());

    let records = RECORDS.lock().unwrap();
    assert!(records.iter().all(|(level, _)| *level > Level::Warn), "{records:?}");
    assert!(
        records
            .iter()
            .any(|(level, message)| *level == Level::Debug && message.contains("runtime entropy"))
    );
    assert_eq!(records.iter().filter(|(level, _)| *level == Level::Info).count(), 1);
}
