/// A ticker and the amount held, as shown in the portfolio rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holding {
    pub ticker: &'static str,
    pub amount: u32,
}
