/// Escape marker for literal digits and for itself
pub const ESCAPE: char = '\\';

/// Largest count a run token may carry
pub const MAX_RUN: usize = 255;

/// One unit of RLE output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RleToken {
    /// `count` copies of `symbol` written out literally
    Literal { symbol: char, count: usize },
    /// `count` copies of `symbol` written as `(count)(symbol)`
    Run { count: usize, symbol: char },
}

impl RleToken {
    /// Number of input symbols this token stands for
    pub fn decoded_len(&self) -> usize {
        match self {
            RleToken::Literal { count, .. } | RleToken::Run { count, .. } => *count,
        }
    }

    /// Append the textual form of this token to `out`
    pub fn write_to(&self, out: &mut String) {
        match *self {
            RleToken::Literal { symbol, count } => {
                for _ in 0..count {
                    push_symbol(out, symbol);
                }
            }
            RleToken::Run { count, symbol } => {
                out.push_str(&count.to_string());
                push_symbol(out, symbol);
            }
        }
    }
}

/// Whether `symbol` must be escaped to stay distinguishable from a run count
pub fn needs_escape(symbol: char) -> bool {
    symbol.is_ascii_digit() || symbol == ESCAPE
}

fn push_symbol(out: &mut String, symbol: char) {
    if needs_escape(symbol) {
        out.push(ESCAPE);
    }
    out.push(symbol);
}
