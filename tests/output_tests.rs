use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use word_bench::{Output, Word};

#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

struct FullDisk;

impl Write for FullDisk {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("no space left"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_tally() {
    let buffer = SharedBuffer::default();
    let mut output = Output::from_writer(buffer.clone());
    let tally: Vec<(Word, usize)> = vec![("clarissa".into(), 2), ("dear".into(), 0)];

    output.write_tally(&tally).unwrap();

    assert_eq!(buffer.contents(), "clarissa: 2\ndear: 0\n");
}

#[test]
fn test_write_line() {
    let buffer = SharedBuffer::default();
    let mut output = Output::from_writer(buffer.clone());

    output.write_line("repeats 30\n").unwrap();
    output.flush().unwrap();

    assert_eq!(buffer.contents(), "repeats 30\n");
}

#[test]
fn test_broken_pipe_is_ignored() {
    let mut output = Output::from_writer(ClosedPipe);

    assert!(output.write_line("lost\n").is_ok());
    assert!(output.flush().is_ok());
}

#[test]
fn test_other_errors_propagate() {
    let mut output = Output::from_writer(FullDisk);

    assert!(output.write_line("lost\n").is_err());
}
