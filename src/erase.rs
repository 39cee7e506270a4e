// SPDX-License-Identifier: MIT

//! Wiping buffers that held secret characters.
//!
//! Owned scratch space is wrapped in [`Zeroizing`](zeroize::Zeroizing)
//! so it is cleared on every exit path. Buffers borrowed from the
//! caller cannot be handled that way, so [`wipe_on_err`] clears them
//! before an error is handed back.
use crate::error::Result;
use zeroize::Zeroize;

/// Run `f` over `buf` and zero `buf` if `f` fails.
pub fn wipe_on_err<T, R, F>(buf: &mut T, f: F) -> Result<R>
where
    T: Zeroize + ?Sized,
    F: FnOnce(&mut T) -> Result<R>,
{
    let res = f(buf);
    if res.is_err() {
        buf.zeroize();
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn wipes_after_failure() {
        let mut buf = ['s', 'e', 'c', 'r', 'e', 't'];
        let res: Result<()> = wipe_on_err(&mut buf[..], |b| {
            b[0] = 'x';
            Err(Error::NoClassSelected)
        });
        assert!(res.is_err());
        assert_eq!(buf, ['\0'; 6]);
    }

    #[test]
    fn keeps_on_success() -> Result<()> {
        let mut buf = ['a', 'b'];
        let n = wipe_on_err(&mut buf[..], |b| {
            b[1] = 'c';
            Ok(b.len())
        })?;
        assert_eq!(n, 2);
        assert_eq!(buf, ['a', 'c']);
        Ok(())
    }
}
