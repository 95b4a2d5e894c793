//! Growable digit storage with an inline fast path and copy-on-write heap blocks.
//!
//! Up to [`INLINE_CAPACITY`] digits are stored directly in the buffer. Past that,
//! digits move to a reference-counted heap block, which clones of the buffer
//! share. Every path that hands out mutable access (including [`DerefMut`])
//! first makes the block exclusive, so a write is never observed through
//! another buffer.
//!
//! Without the `sync` feature the reference count is an [`Rc`][alloc::rc::Rc],
//! so buffers (and hence integers) are neither `Send` nor `Sync`.

use core::{fmt, hash::{Hash, Hasher}, ops::{Deref, DerefMut}};

use alloc::vec::Vec;
use zeroize::Zeroize;

use crate::Digit;

#[cfg(not(feature = "sync"))]
use alloc::rc::Rc as Shared;
#[cfg(feature = "sync")]
use alloc::sync::Arc as Shared;

/// Number of digits a [`LimbBuffer`] holds without allocating.
pub const INLINE_CAPACITY: usize = 7;

#[derive(Clone)]
enum Storage {
    Inline { len: usize, limbs: [Digit; INLINE_CAPACITY] },
    Heap(Shared<Vec<Digit>>),
}

/// Something like a `Vec<Digit>`, but cheap to clone.
///
/// Cloning copies the inline digits, or bumps the reference count of the heap
/// block. Reads go through `Deref<Target = [Digit]>`, writes through
/// `DerefMut`, [`push`][Self::push], [`pop`][Self::pop] and [`resize`][Self::resize].
#[derive(Clone)]
pub struct LimbBuffer {
    storage: Storage,
}

impl LimbBuffer {
    pub const fn new() -> Self {
        Self { storage: Storage::Inline { len: 0, limbs: [0; INLINE_CAPACITY] } }
    }

    /// Buffer of `len` zero digits.
    pub fn with_len(len: usize) -> Self {
        let mut buffer = Self::new();
        buffer.resize(len);
        buffer
    }

    pub fn from_slice(digits: &[Digit]) -> Self {
        if digits.len() <= INLINE_CAPACITY {
            let mut limbs = [0; INLINE_CAPACITY];
            limbs[..digits.len()].copy_from_slice(digits);
            Self { storage: Storage::Inline { len: digits.len(), limbs } }
        } else {
            let mut block = Vec::with_capacity(2 * digits.len());
            block.extend_from_slice(digits);
            Self { storage: Storage::Heap(Shared::new(block)) }
        }
    }

    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Inline { len, .. } => *len,
            Storage::Heap(block) => block.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        match &self.storage {
            Storage::Inline { .. } => INLINE_CAPACITY,
            Storage::Heap(block) => block.capacity(),
        }
    }

    /// Digits live inside the buffer itself, not on the heap.
    pub fn is_inline(&self) -> bool {
        matches!(self.storage, Storage::Inline { .. })
    }

    /// The heap block is referenced by more than one buffer.
    pub fn is_shared(&self) -> bool {
        self.ref_count() > 1
    }

    /// Number of buffers referencing the heap block; 1 when inline.
    pub fn ref_count(&self) -> usize {
        match &self.storage {
            Storage::Inline { .. } => 1,
            Storage::Heap(block) => Shared::strong_count(block),
        }
    }

    pub fn push(&mut self, digit: Digit) {
        if let Storage::Inline { len, limbs } = &mut self.storage {
            if *len < INLINE_CAPACITY {
                limbs[*len] = digit;
                *len += 1;
                return;
            }
        }
        let len = self.len();
        self.reserve_total(len + 1);
        if let Storage::Heap(block) = &mut self.storage {
            Self::make_unique(block).push(digit);
        }
    }

    pub fn pop(&mut self) -> Option<Digit> {
        match &mut self.storage {
            Storage::Inline { len, limbs } => {
                if *len == 0 {
                    None
                } else {
                    *len -= 1;
                    Some(limbs[*len])
                }
            }
            Storage::Heap(block) => Self::make_unique(block).pop(),
        }
    }

    /// Sets the length to `n`, zero-filling new digits.
    ///
    /// A heap-backed buffer resized to at most [`INLINE_CAPACITY`] digits moves
    /// back inline, releasing its reference to the block.
    pub fn resize(&mut self, n: usize) {
        match &mut self.storage {
            Storage::Inline { len, limbs } if n <= INLINE_CAPACITY => {
                if n > *len {
                    limbs[*len..n].fill(0);
                }
                *len = n;
            }
            Storage::Heap(block) if n <= INLINE_CAPACITY => {
                let kept = block.len().min(n);
                let mut limbs = [0; INLINE_CAPACITY];
                limbs[..kept].copy_from_slice(&block[..kept]);
                trace!("demoting {} digits to inline storage", n);
                self.storage = Storage::Inline { len: n, limbs };
            }
            _ => {
                self.reserve_total(n);
                if let Storage::Heap(block) = &mut self.storage {
                    Self::make_unique(block).resize(n, 0);
                }
            }
        }
    }

    pub fn truncate(&mut self, n: usize) {
        if n < self.len() {
            self.resize(n);
        }
    }

    /// Empties the buffer, dropping any reference to a heap block.
    pub fn clear(&mut self) {
        self.storage = Storage::Inline { len: 0, limbs: [0; INLINE_CAPACITY] };
    }

    /// Ensures an exclusively owned heap block with room for `n` digits.
    ///
    /// An inline buffer is always promoted, so it must only get here with
    /// `n > INLINE_CAPACITY`. Grows to `2n` when the current
    /// block is too small.
    fn reserve_total(&mut self, n: usize) {
        match &mut self.storage {
            Storage::Inline { len, limbs } => {
                let mut block = Vec::with_capacity(2 * n);
                block.extend_from_slice(&limbs[..*len]);
                trace!("promoting {} digits to the heap, capacity {}", block.len(), 2 * n);
                self.storage = Storage::Heap(Shared::new(block));
            }
            Storage::Heap(block) => {
                let block = Self::make_unique(block);
                if block.capacity() < n {
                    block.reserve_exact(2 * n - block.len());
                }
            }
        }
    }

    /// Copy-on-write: clone the block if anybody else holds it.
    fn make_unique(block: &mut Shared<Vec<Digit>>) -> &mut Vec<Digit> {
        if Shared::strong_count(block) > 1 {
            trace!("cloning shared block of {} digits", block.len());
            let mut fresh = Vec::with_capacity(block.capacity());
            fresh.extend_from_slice(block.as_slice());
            *block = Shared::new(fresh);
        }
        // unique by now, so this does not clone
        Shared::make_mut(block)
    }
}

impl Default for LimbBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for LimbBuffer {
    type Target = [Digit];
    fn deref(&self) -> &Self::Target {
        match &self.storage {
            Storage::Inline { len, limbs } => &limbs[..*len],
            Storage::Heap(block) => block.as_slice(),
        }
    }
}

impl DerefMut for LimbBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match &mut self.storage {
            Storage::Inline { len, limbs } => &mut limbs[..*len],
            Storage::Heap(block) => Self::make_unique(block).as_mut_slice(),
        }
    }
}

impl From<&[Digit]> for LimbBuffer {
    fn from(digits: &[Digit]) -> Self {
        Self::from_slice(digits)
    }
}

impl PartialEq for LimbBuffer {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl Eq for LimbBuffer {}

impl Hash for LimbBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state)
    }
}

impl fmt::Debug for LimbBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl Zeroize for LimbBuffer {
    /// Wipes digits this buffer owns exclusively and leaves it empty.
    ///
    /// A block still shared with other buffers is only released, since its
    /// digits are still theirs to read.
    fn zeroize(&mut self) {
        match &mut self.storage {
            Storage::Inline { limbs, .. } => limbs.zeroize(),
            Storage::Heap(block) => {
                if let Some(block) = Shared::get_mut(block) {
                    block.zeroize();
                }
            }
        }
        self.clear();
    }
}
