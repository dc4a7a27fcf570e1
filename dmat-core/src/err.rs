use derive_more::Display;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum MatError { 
    #[display("dimension mismatch in {op}: {lhs:?} vs {rhs:?}")]
    DimensionMismatch { 
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[display("index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds { 
        index: (usize, usize),
        shape: (usize, usize),
    },

    #[display("malformed shape: {_0}")]
    MalformedShape(String),
}

impl std::error::Error for MatError {}

pub type MatResult<T> = Result<T, MatError>;

macro_rules! malformed {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        log::debug!("reject matrix: {msg}");
        Err( $crate::err::MatError::MalformedShape(msg) )
    }}
}

macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {{
        if !$cond { 
            return malformed!($($arg)*);
        }
    }}
}

pub(crate) use {malformed, ensure};
