/// Cast an integer expression to a usize using TryInto, yielding `$fallback` when the value does
/// not fit (negative, or wider than the target's pointer width).
macro_rules! cast_usize {
    ($e:expr, $fallback:expr) => {{
        match <_ as TryInto<usize>>::try_into($e) {
            Ok(u) => u,
            Err(_) => $fallback,
        }
    }};
}
pub(crate) use cast_usize;

#[cfg(test)]
mod tests {
    #[test]
    fn in_range() {
        assert_eq!(cast_usize!(16u8, 0), 16);
        assert_eq!(cast_usize!(1024i64, 0), 1024);
    }

    #[test]
    fn out_of_range() {
        assert_eq!(cast_usize!(-1i32, 0), 0);
        assert_eq!(cast_usize!(i64::MIN, 7), 7);
    }
}
