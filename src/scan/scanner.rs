//! Early-exit scan over date-ordered record streams.
//!
//! The sources are append-only CSV logs sorted ascending by their date
//! column. The scanner yields exactly the records whose date equals the
//! target, and stops pulling from the source permanently at the first
//! record whose date exceeds it. Single pass, streaming, no whole-file
//! buffering, no re-scan of consumed rows.
//!
//! Sortedness is a precondition, not a checked property: on an unsorted
//! source, matching rows after the first out-of-order record may be
//! missed.

use csv::StringRecord;

use crate::date::DateKey;

use super::errors::{ScanError, ScanResult};

/// Streaming scan adapter that stops at the first record past `target`.
///
/// `extract` pulls the raw date text out of a record (`None` when the
/// record is too short to carry one). After the cutoff fires or an
/// error is yielded, the iterator is fused: it returns `None` forever
/// and never touches the source again.
pub struct DateScan<I, F> {
    source: I,
    target: DateKey,
    extract: F,
    /// 1-based record number, for error reporting.
    position: u64,
    done: bool,
}

impl<I, F> DateScan<I, F>
where
    I: Iterator<Item = csv::Result<StringRecord>>,
    F: Fn(&StringRecord) -> Option<&str>,
{
    /// Creates a scan of `source` for records dated exactly `target`.
    pub fn new(source: I, target: DateKey, extract: F) -> Self {
        Self {
            source,
            target,
            extract,
            position: 0,
            done: false,
        }
    }
}

impl<I, F> Iterator for DateScan<I, F>
where
    I: Iterator<Item = csv::Result<StringRecord>>,
    F: Fn(&StringRecord) -> Option<&str>,
{
    type Item = ScanResult<StringRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let record = match self.source.next() {
                Some(Ok(record)) => record,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(ScanError::malformed_record(self.position + 1, e)));
                }
                None => {
                    self.done = true;
                    return None;
                }
            };
            self.position += 1;

            let raw = match (self.extract)(&record) {
                Some(raw) => raw,
                None => {
                    self.done = true;
                    return Some(Err(ScanError::missing_date(self.position)));
                }
            };

            let date = match DateKey::parse(raw) {
                Ok(date) => date,
                Err(e) => {
                    let err = ScanError::bad_date(self.position, raw, e);
                    self.done = true;
                    return Some(Err(err));
                }
            };

            if date == self.target {
                return Some(Ok(record));
            }
            if date > self.target {
                // Past the target in a sorted log: nothing further can match.
                self.done = true;
                return None;
            }
            // Before the target: keep skipping.
        }
    }
}
