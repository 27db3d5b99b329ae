/// Sequential voucher number generator.
///
/// The builder does not own voucher numbering; the caller tracks it with
/// this sequence. Numbers start at 1 and never repeat within one document.
#[derive(Debug, Clone)]
pub struct VoucherSequence {
    next_number: u64,
    issued: u64,
}

impl Default for VoucherSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl VoucherSequence {
    /// Create a new sequence starting at 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(next_number: u64) -> Self {
        Self {
            next_number,
            issued: 0,
        }
    }

    /// Hand out the next voucher number.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        let num = self.next_number;
        self.next_number += 1;
        self.issued += 1;
        num
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> u64 {
        self.next_number
    }

    /// How many numbers this sequence has handed out.
    pub fn issued(&self) -> u64 {
        self.issued
    }
}
