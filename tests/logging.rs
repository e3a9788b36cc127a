use std::sync::Arc;

use linelog::{Logger, SharedBuffer, log_debug, log_error, log_info, log_warning};
use regex::Regex;

#[test]
fn concurrent_calls_never_tear_lines() {
    let buffer = SharedBuffer::new();
    let logger = Arc::new(Logger::with_sink(Box::new(buffer.clone())));
    logger.set_colors(false);

    let num_threads = 8;
    let loops_per_thread = 50;
    let handles: Vec<_> = (0..num_threads)
        .map(|thread| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                for i in 0..loops_per_thread {
                    log_debug!(to: logger, "loop", i, "- thread", thread);
                    log_info!(to: logger, "loop", i, "- thread", thread);
                    log_warning!(to: logger, "loop", i, "- thread", thread);
                    log_error!(to: logger, "loop", i, "- thread", thread);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let contents = buffer.contents();
    let shape = Regex::new(
        r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3}\s+\[(DEBUG|INFO|WARN|ERROR)\] loop \d+ - thread \d+$",
    )
    .unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), num_threads * loops_per_thread * 4);
    for line in &lines {
        assert!(shape.is_match(line), "torn or malformed line: {line:?}");
    }
}

#[test]
fn file_sink_receives_complete_lines() {
    let path = "/tmp/test_linelog_integration.log";
    std::fs::remove_file(path).ok();

    let logger = Logger::new();
    logger.set_colors(false);
    logger.set_output(Box::new(linelog::LogFile::new(path).unwrap()));
    log_info!(to: logger, "written to file");
    log_warning!(to: logger, "still in file");
    logger.reset_output();
    log_info!(to: logger, "back on stdout");

    let contents = std::fs::read_to_string(path).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("[INFO] written to file"));
    assert!(lines[1].ends_with("[WARN] still in file"));
}

#[test]
fn heterogeneous_arguments_share_a_line() {
    let buffer = SharedBuffer::new();
    let logger = Logger::with_sink(Box::new(buffer.clone()));
    logger.set_colors(false);

    let name = String::from("worker");
    log_info!(to: logger, name, 7_u64, 'x', false, linelog::precision(3), 2.5_f64);
    let contents = buffer.contents();
    assert!(contents.ends_with("[INFO] worker 7 x false 2.500\n"));
}
