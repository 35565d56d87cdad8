//! The remote transfer primitive — the native call that exchanges a
//! submission record with the transfer service.
//!
//! The primitive fills the record's return-code, remote-path and job-number
//! fields in place and writes a NUL-terminated reply message.

use thiserror::Error;

use crate::record::RECORD_LEN;

/// Size of the reply message buffer handed to the primitive.
pub const MESSAGE_LEN: usize = 201;

/// Name of the native transfer library.
pub const LIBRARY: &str = "pxuotrxw";

/// Failures to reach the primitive at all, as opposed to failure replies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("transfer library {0} not available")]
    Unavailable(String),
    #[error("transfer library incompatible with this process: {0}")]
    Incompatible(String),
    #[error("transfer call failed: {0}")]
    Fault(String),
}

/// One blocking record exchange with the transfer service.
pub trait TransferPrimitive: Send + Sync {
    /// Exchange `record` in place and fill `message`. Returns the call's raw
    /// status; the record's return-code field is the authoritative result.
    fn exchange(
        &self,
        record: &mut [u8; RECORD_LEN],
        message: &mut [u8; MESSAGE_LEN],
    ) -> Result<i32, TransportError>;
}

/// The native `pxuotrxw` entry point.
///
/// The library is 32-bit Windows only. It is linked when the crate is built
/// with the `native` feature for a 32-bit Windows target; everywhere else the
/// exchange reports the library as unavailable or incompatible.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePrimitive;

#[cfg(all(windows, target_pointer_width = "32", feature = "native"))]
mod ffi {
    #[link(name = "pxuotrxw")]
    extern "system" {
        pub fn pxuotrxw(record: *mut u8, message: *mut u8) -> i32;
    }
}

impl TransferPrimitive for NativePrimitive {
    #[cfg(all(windows, target_pointer_width = "32", feature = "native"))]
    fn exchange(
        &self,
        record: &mut [u8; RECORD_LEN],
        message: &mut [u8; MESSAGE_LEN],
    ) -> Result<i32, TransportError> {
        // SAFETY: both buffers are exclusively borrowed and sized to the
        // layout the library expects; the library writes within them only.
        let status = unsafe { ffi::pxuotrxw(record.as_mut_ptr(), message.as_mut_ptr()) };
        Ok(status)
    }

    #[cfg(not(all(windows, target_pointer_width = "32", feature = "native")))]
    fn exchange(
        &self,
        _record: &mut [u8; RECORD_LEN],
        _message: &mut [u8; MESSAGE_LEN],
    ) -> Result<i32, TransportError> {
        if cfg!(all(windows, feature = "native")) {
            Err(TransportError::Incompatible(format!(
                "{LIBRARY} is a 32-bit library; build for i686-pc-windows-msvc"
            )))
        } else {
            Err(TransportError::Unavailable(LIBRARY.to_string()))
        }
    }
}
