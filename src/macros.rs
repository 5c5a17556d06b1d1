macro_rules! bitpos {
    ($idx:expr) => {{
        let idx = $idx;
        (
            idx / $crate::storage::WORD_BITS,
            idx % $crate::storage::WORD_BITS,
        )
    }};
}

/// Forwards to `tracing` when the `tracing` feature is enabled, otherwise
/// expands to nothing.
macro_rules! event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)+);
    };
}

pub(crate) use bitpos;
pub(crate) use event;
