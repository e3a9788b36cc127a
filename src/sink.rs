use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    sync::{Arc, Mutex},
};

/// Destination for formatted log lines.
///
/// The logger owns its sink and calls `write_line` with one complete line at
/// a time, never concurrently. Writes are fire-and-forget: implementations
/// swallow I/O errors rather than report them.
pub trait LogSink: Send {
    fn write_line(&mut self, line: &str);
}

/// Default sink. Flushes after every line so output keeps up with the caller.
#[derive(Default)]
pub struct LogStdout;

impl LogSink for LogStdout {
    fn write_line(&mut self, line: &str) {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{line}").ok();
        out.flush().ok();
    }
}

/// File sink. The log file is created if it does not exist and appended to if
/// it does.
pub struct LogFile {
    file: BufWriter<File>,
}

impl LogFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, std::io::Error> {
        let file = File::options().create(true).append(true).open(&path)?;
        Ok(Self {
            file: BufWriter::new(file),
        })
    }
}

impl LogSink for LogFile {
    fn write_line(&mut self, line: &str) {
        writeln!(self.file, "{line}").ok();
        self.file.flush().ok();
    }
}

/// In-memory sink with a cloneable observation handle. Clones share the same
/// buffer, so a caller can hand one clone to a logger and read the output
/// back through another.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    buffer: Arc<Mutex<String>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buffer.lock().unwrap().clone()
    }
}

impl LogSink for SharedBuffer {
    fn write_line(&mut self, line: &str) {
        let mut buffer = self.buffer.lock().unwrap();
        buffer.push_str(line);
        buffer.push('\n');
    }
}

#[test]
fn test_log_file_appends() {
    let path = "/tmp/test_linelog_sink.log";
    std::fs::remove_file(path).ok();
    {
        let mut file = LogFile::new(path).unwrap();
        file.write_line("Hello, world!");
        file.write_line("rust is awesome !");
    }
    {
        let mut file = LogFile::new(path).unwrap();
        file.write_line("appended");
    }
    assert_eq!(
        std::fs::read_to_string(path).unwrap(),
        "Hello, world!\nrust is awesome !\nappended\n"
    );
}

#[test]
fn test_shared_buffer_clones_observe_writes() {
    let buffer = SharedBuffer::new();
    let mut writer = buffer.clone();
    writer.write_line("lorem ipsum");
    writer.write_line("ipsum lorem");
    assert_eq!(buffer.contents(), "lorem ipsum\nipsum lorem\n");
}
