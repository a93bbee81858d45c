//! Logger construction, initialization, sink configuration and concurrency.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use twinlog::{Error, Level, Logger, MemoryBackend, Mode, Settings, SinkState, StorageBackend};

#[test]
fn builder_defaults() {
    let logger = Logger::builder().backend(MemoryBackend::new()).build();
    assert_eq!(logger.log_path(), Path::new("."));
    assert_eq!(logger.log_filename(), "twinlog.log");
    assert_eq!(logger.error_log_filename(), "twinlog.err.log");
    assert!(!logger.is_initialized());
    assert_eq!(logger.settings(), Settings::default());
}

#[test]
fn first_write_initializes_lazily() {
    let backend = MemoryBackend::new();
    let logger = Logger::builder().backend(backend.clone()).dir("/x").build();
    assert_eq!(logger.sink_state(Level::Info), SinkState::Unconfigured);

    logger.log("hi").unwrap();
    assert!(logger.is_initialized());
    assert_eq!(logger.sink_state(Level::Info), SinkState::Open);
    // Probed during init, not opened yet
    assert_eq!(logger.sink_state(Level::Error), SinkState::Configured);
    assert!(backend.exists("/x/twinlog.err.log"));
}

#[test]
fn init_collects_every_failed_step() {
    let backend = MemoryBackend::new();
    backend.deny_directory("/ro-a");
    backend.deny_directory("/ro-b");
    let logger = Logger::builder()
        .backend(backend.clone())
        .log_path("/ro-a")
        .error_log_path("/ro-b")
        .build();

    let Err(Error::InitializationFailed(failures)) = logger.init() else {
        panic!("init should fail");
    };
    assert_eq!(failures.len(), 2);
    assert!(
        failures
            .iter()
            .all(|e| matches!(e, Error::DirectoryCreationFailed { .. }))
    );
    assert!(!logger.is_initialized());

    // The write path reports the same failure instead of panicking
    assert!(matches!(
        logger.log("x"),
        Err(Error::InitializationFailed(_))
    ));

    backend.allow_all();
    logger.log("x").unwrap();
    assert_eq!(backend.contents("/ro-a/twinlog.log"), "x\n");
}

#[test]
fn empty_filename_fails_init() {
    let logger = Logger::builder()
        .backend(MemoryBackend::new())
        .log_filename("")
        .build();
    let Err(Error::InitializationFailed(failures)) = logger.init() else {
        panic!("init should fail");
    };
    assert!(matches!(failures.as_slice(), [Error::InvalidName]));
}

#[test]
fn set_filename_rejected_while_open() {
    let backend = MemoryBackend::new();
    let logger = Logger::builder().backend(backend.clone()).dir("/s").build();
    logger.open_logger().unwrap();

    assert!(matches!(
        logger.set_log_filename("other.log"),
        Err(Error::AlreadyOpen)
    ));
    assert!(matches!(
        logger.set_log_path("/elsewhere"),
        Err(Error::AlreadyOpen)
    ));
    assert_eq!(logger.log_filename(), "twinlog.log");

    // The error sink is independent and still unfrozen
    logger.set_error_log_filename("errors.log").unwrap();
    assert_eq!(logger.error_log_filename(), "errors.log");

    logger.close_logger().unwrap();
    assert_eq!(logger.sink_state(Level::Info), SinkState::Closed);
    logger.set_log_filename("other.log").unwrap();
    logger.log("after").unwrap();
    assert_eq!(backend.contents("/s/other.log"), "after\n");
}

#[test]
fn open_is_idempotent_and_close_requires_open() {
    let logger = Logger::builder().backend(MemoryBackend::new()).build();
    assert!(matches!(logger.close_error_logger(), Err(Error::NotOpen)));
    logger.open_error_logger().unwrap();
    logger.open_error_logger().unwrap();
    logger.close_error_logger().unwrap();
    assert!(matches!(logger.close_error_logger(), Err(Error::NotOpen)));
}

#[test]
fn invalid_filename_keeps_previous() {
    let logger = Logger::builder().backend(MemoryBackend::new()).build();
    assert!(matches!(logger.set_log_filename(""), Err(Error::InvalidName)));
    assert_eq!(logger.log_filename(), "twinlog.log");
}

#[test]
fn open_failure_during_write_is_returned() {
    let backend = MemoryBackend::new();
    let logger = Logger::builder().backend(backend.clone()).dir("/w").build();
    logger.init().unwrap();
    backend.deny_open("/w/twinlog.err.log");

    assert!(matches!(
        logger.log_error("x"),
        Err(Error::CannotOpen { .. })
    ));
    // The other sink is unaffected
    logger.log("fine").unwrap();
    assert_eq!(backend.contents("/w/twinlog.log"), "fine\n");
}

#[test]
fn write_failure_is_returned() {
    let backend = MemoryBackend::new();
    let logger = Logger::builder().backend(backend.clone()).dir("/w").build();
    logger.open_logger().unwrap();
    backend.deny_write("/w/twinlog.log");
    assert!(matches!(logger.log("x"), Err(Error::WriteFailed { .. })));
}

#[test]
fn settings_update_applies_to_next_record() {
    let backend = MemoryBackend::new();
    let logger = Logger::builder().backend(backend.clone()).dir("/u").build();

    logger.set_settings(Settings {
        auto_newline: false,
        ..Settings::default()
    });
    logger.log("a").unwrap();
    logger.update_settings(|s| s.auto_newline = true);
    logger.log("b").unwrap();

    assert_eq!(backend.contents("/u/twinlog.log"), "ab\n");
    assert!(logger.settings().auto_newline);
}

#[test]
fn real_files_on_disk() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("a").join("b");
    let logger = Logger::builder()
        .log_path(&nested)
        .error_log_path(tmp.path())
        .build();

    logger.log("one").unwrap();
    logger.info().append("two");
    logger.log_error_with("bad", Mode::NO_NEWLINE).unwrap();

    let info = fs::read_to_string(nested.join("twinlog.log")).unwrap();
    let error = fs::read_to_string(tmp.path().join("twinlog.err.log")).unwrap();
    assert_eq!(info, "one\ntwo\n");
    assert_eq!(error, "bad");
}

#[test]
fn reopening_appends() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::builder().dir(tmp.path()).build();
    logger.log("first").unwrap();
    logger.close_logger().unwrap();
    logger.log("second").unwrap();

    let second = Logger::builder().dir(tmp.path()).build();
    second.log("third").unwrap();

    let info = fs::read_to_string(tmp.path().join("twinlog.log")).unwrap();
    assert_eq!(info, "first\nsecond\nthird\n");
}

#[test]
fn concurrent_writers_never_interleave() {
    let backend = MemoryBackend::new();
    let logger = Logger::builder().backend(backend.clone()).dir("/c").build();

    std::thread::scope(|scope| {
        for t in 0..8 {
            let logger = &logger;
            scope.spawn(move || {
                for i in 0..50 {
                    logger
                        .info()
                        .append("thread-")
                        .append(t)
                        .append(" line-")
                        .append(i);
                }
            });
        }
    });

    let contents = backend.contents("/c/twinlog.log");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 400);
    assert!(lines.iter().all(|l| l.starts_with("thread-") && l.contains(" line-")));
    assert_eq!(backend.write_count("/c/twinlog.log"), 400);
}

#[test]
fn global_logger_is_shared() {
    assert!(std::ptr::eq(twinlog::global(), twinlog::global()));
}

#[test]
fn update_settings_closure_can_use_the_logger() {
    let backend = MemoryBackend::new();
    let logger = Logger::builder().backend(backend.clone()).dir("/r").build();

    logger.update_settings(|s| {
        s.auto_newline = false;
        logger.log("inside").unwrap();
        assert!(logger.settings().auto_newline);
        let _ = format!("{logger:?}");
    });
    logger.log("after").unwrap();

    assert_eq!(backend.contents("/r/twinlog.log"), "inside\nafter");
    assert!(!logger.settings().auto_newline);
}

#[test]
fn loggers_can_share_one_backend() {
    let backend = MemoryBackend::new();
    let shared: Arc<dyn StorageBackend> = Arc::new(backend.clone());
    let a = Logger::builder().shared_backend(Arc::clone(&shared)).dir("/a").build();
    let b = Logger::builder().shared_backend(shared).dir("/b").build();

    a.log("from a").unwrap();
    b.log_error("from b").unwrap();

    assert_eq!(backend.contents("/a/twinlog.log"), "from a\n");
    assert_eq!(backend.contents("/b/twinlog.err.log"), "from b\n");
}
