use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use terra_types::DigestTrace;
use tracing::debug;

use crate::error::{CryptoError, CryptoResult};
use crate::hasher::CompositeHasher;

/// Read size used when the caller has no preference.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Composite digest of everything `reader` yields until EOF.
///
/// Input is consumed in blocks of `chunk_size` bytes, so memory use stays
/// bounded regardless of input length. The result is identical to hashing the
/// whole input at once.
pub fn digest_reader<R: Read>(mut reader: R, chunk_size: usize) -> CryptoResult<DigestTrace> {
    if chunk_size == 0 {
        return Err(CryptoError::InvalidChunkSize(chunk_size));
    }

    let mut hasher = CompositeHasher::new();
    let mut buf = vec![0u8; chunk_size];
    let mut chunks = 0u64;
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                hasher.update(&buf[..n]);
                chunks += 1;
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    debug!(bytes = hasher.bytes_hashed(), chunks, "reader digest complete");
    Ok(hasher.finalize_trace())
}

/// Composite digest of a file's contents.
pub fn digest_file(path: impl AsRef<Path>, chunk_size: usize) -> CryptoResult<DigestTrace> {
    let path = path.as_ref();
    debug!(path = %path.display(), "hashing file");
    let file = File::open(path)?;
    digest_reader(file, chunk_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::composite_trace;
    use std::io::{Cursor, Write};

    /// Fails with `Interrupted` on every other read.
    struct Flaky<R> {
        inner: R,
        interrupt_next: bool,
    }

    impl<R: Read> Read for Flaky<R> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt_next = !self.interrupt_next;
            if self.interrupt_next {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "try again"));
            }
            self.inner.read(buf)
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    fn data(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i.wrapping_mul(31) ^ (i >> 2)) as u8).collect()
    }

    #[test]
    fn reader_matches_one_shot_for_any_chunk_size() {
        let input = data(20_000);
        let expected = composite_trace(&input);
        for chunk_size in [1, 7, 64, 1000, DEFAULT_CHUNK_SIZE, 1 << 16] {
            let trace = digest_reader(Cursor::new(&input), chunk_size).unwrap();
            assert_eq!(trace, expected, "chunk size {chunk_size}");
        }
    }

    #[test]
    fn empty_reader_matches_empty_input() {
        let trace = digest_reader(io::empty(), DEFAULT_CHUNK_SIZE).unwrap();
        assert_eq!(trace, composite_trace(b""));
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let err = digest_reader(Cursor::new(b"abc"), 0).unwrap_err();
        assert!(matches!(err, CryptoError::InvalidChunkSize(0)));
    }

    #[test]
    fn interrupted_reads_are_retried() {
        let input = data(5000);
        let reader = Flaky {
            inner: Cursor::new(input.clone()),
            interrupt_next: false,
        };
        let trace = digest_reader(reader, 512).unwrap();
        assert_eq!(trace, composite_trace(&input));
    }

    #[test]
    fn read_errors_propagate() {
        let err = digest_reader(Broken, 16).unwrap_err();
        match err {
            CryptoError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn file_digest_matches_contents() {
        let input = data(30_000);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&input).unwrap();
        file.flush().unwrap();

        let trace = digest_file(file.path(), DEFAULT_CHUNK_SIZE).unwrap();
        assert_eq!(trace, composite_trace(&input));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = digest_file(dir.path().join("absent.bin"), DEFAULT_CHUNK_SIZE).unwrap_err();
        assert!(matches!(err, CryptoError::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
    }
}
