//! Contiguous text storage with block-wise growth.
//!
//! [`TextStore`] is the lowest layer of the editing core: a flat run of
//! single-byte text units with bounds-checked insert and delete, plus the
//! line boundary scans that cursor navigation is built on. It knows nothing
//! about history or selections.
//!
//! The backing allocation always keeps one unit past the logical end, which
//! holds a `0` terminator so renderers can take a terminated view without
//! copying.

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};

/// Default growth increment, in text units.
pub const DEFAULT_BLOCK_SIZE: usize = 16;

/// Storage configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    /// Capacity grows in multiples of this many units. Zero is treated as 1.
    pub block_size: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

/// Growable contiguous text buffer.
///
/// Invariants:
/// - `data.len()` is the capacity and is a multiple of the block size
/// - `len + 1 <= data.len()`
/// - every unit at or past `len` is `0`
#[derive(Clone, Debug)]
pub struct TextStore {
    data: Vec<u8>,
    len: usize,
    block_size: usize,
}

impl Default for TextStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TextStore {
    /// Create an empty store with the default block size.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    /// Create an empty store with custom options.
    #[must_use]
    pub fn with_options(options: StoreOptions) -> Self {
        let block_size = options.block_size.max(1);
        Self {
            data: vec![0; block_size],
            len: 0,
            block_size,
        }
    }

    /// Create a store holding `text`.
    #[must_use]
    pub fn with_text(text: &[u8], options: StoreOptions) -> Self {
        let block_size = options.block_size.max(1);
        let capacity = (text.len() + 1).div_ceil(block_size) * block_size;
        let mut data = vec![0; capacity];
        data[..text.len()].copy_from_slice(text);
        Self {
            data,
            len: text.len(),
            block_size,
        }
    }

    /// Number of valid text units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated size in units, terminator slot included.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Growth increment in units.
    #[must_use]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// The stored text, `data[0..len)`.
    #[must_use]
    pub fn contents(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// The stored text followed by a `0` terminator.
    #[must_use]
    pub fn terminated(&self) -> &[u8] {
        &self.data[..=self.len]
    }

    /// The stored text as UTF-8, replacing invalid units.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.contents())
    }

    /// Unit at `offset`, if inside the text.
    #[must_use]
    pub fn get(&self, offset: usize) -> Option<u8> {
        self.contents().get(offset).copied()
    }

    /// Borrow `size` units starting at `position`.
    pub fn span(&self, position: usize, size: usize) -> Result<&[u8]> {
        let end = self.span_end(position, size)?;
        Ok(&self.data[position..end])
    }

    /// Number of lines; an empty store has one.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.contents().iter().filter(|&&b| b == b'\n').count() + 1
    }

    /// Make room for a total of `total_len` units without further growth.
    ///
    /// Capacity grows in whole blocks until `total_len + 1` units fit. A
    /// failed allocation leaves the store unchanged.
    pub fn reserve(&mut self, total_len: usize) -> Result<()> {
        let needed = total_len.saturating_add(1);
        let capacity = self.data.len();
        if needed <= capacity {
            return Ok(());
        }

        let blocks = needed.div_ceil(self.block_size);
        let new_capacity = blocks.saturating_mul(self.block_size);
        self.data.try_reserve_exact(new_capacity - capacity)?;
        self.data.resize(new_capacity, 0);

        emit_log(
            LogLevel::Debug,
            &format!("text store grew from {capacity} to {new_capacity} units"),
        );
        Ok(())
    }

    /// Insert `text` at `position`, shifting the suffix right.
    pub fn insert(&mut self, position: usize, text: &[u8]) -> Result<()> {
        if position > self.len {
            return Err(Error::OutOfRange {
                offset: position,
                len: self.len,
            });
        }
        if text.is_empty() {
            return Ok(());
        }

        let size = text.len();
        self.reserve(self.len + size)?;

        self.data.copy_within(position..self.len, position + size);
        self.data[position..position + size].copy_from_slice(text);
        self.len += size;
        self.data[self.len] = 0;
        Ok(())
    }

    /// Remove `size` units starting at `position`, shifting the suffix left.
    ///
    /// Capacity is never released.
    pub fn delete(&mut self, position: usize, size: usize) -> Result<()> {
        let end = self.span_end(position, size)?;
        if size == 0 {
            return Ok(());
        }

        let old_len = self.len;
        self.data.copy_within(end..old_len, position);
        self.len -= size;
        self.data[self.len..old_len].fill(0);
        Ok(())
    }

    /// Offset just after the `\n` preceding `from`, or 0.
    pub fn find_line_start(&self, from: usize) -> Result<usize> {
        self.check_offset(from)?;
        Ok(self.data[..from]
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |idx| idx + 1))
    }

    /// Offset just after the next `\n` at or after `from`, or `len` when the
    /// rest of the text has none.
    ///
    /// Fails when `from >= len`: no line can start beyond the text.
    pub fn find_next_line_start(&self, from: usize) -> Result<usize> {
        if from >= self.len {
            return Err(Error::OutOfRange {
                offset: from,
                len: self.len,
            });
        }
        Ok(self.data[from..self.len]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(self.len, |idx| from + idx + 1))
    }

    /// Offset of the `\n` ending the line that contains `from`, or `len`.
    pub fn find_line_end(&self, from: usize) -> Result<usize> {
        self.check_offset(from)?;
        Ok(self.data[from..self.len]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(self.len, |idx| from + idx))
    }

    fn check_offset(&self, offset: usize) -> Result<()> {
        if offset > self.len {
            Err(Error::OutOfRange {
                offset,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    fn span_end(&self, position: usize, size: usize) -> Result<usize> {
        match position.checked_add(size) {
            Some(end) if end <= self.len => Ok(end),
            _ => Err(Error::SpanOutOfRange {
                position,
                size,
                len: self.len,
            }),
        }
    }
}
