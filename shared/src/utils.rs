//! # Shared Utility Functions
//!
//! Common utility functions used by the mint frontend and the deploy tool.
//!
//! ## Address Formatting
//!
//! Functions for formatting `0x`-prefixed Ethereum addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the usual `0x1234...abcd` shape
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0xb40c270c3712D01e3cABf73fBCdbce5E5E01d921";
//! let formatted = format_address(address, 6, 4);
//! assert_eq!(formatted, "0xb40c...d921");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, or is not ASCII, it is
/// returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0xb40c270c3712D01e3cABf73fBCdbce5E5E01d921";
/// assert_eq!(format_address(addr, 6, 4), "0xb40c...d921");
/// assert_eq!(format_address(addr, 4, 4), "0xb4...d921");
/// assert_eq!(format_address("0xABC", 6, 4), "0xABC");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Account strings are not validated upstream, so guard the byte slicing
    if !address.is_ascii()
        || address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an address as `0x` plus four characters, ellipsis, and the last four characters.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
/// assert_eq!(truncate_address(addr), "0x71C7...976F");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0xb40c270c3712D01e3cABf73fBCdbce5E5E01d921";
        assert_eq!(format_address(addr, 6, 4), "0xb40c...d921");
        assert_eq!(format_address(addr, 6, 6), "0xb40c...01d921");
        assert_eq!(format_address(addr, 2, 2), "0x...21");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("0xABC...", 6, 4), "0xABC...");
        assert_eq!(format_address("", 6, 4), "");
    }

    #[test]
    fn test_format_address_non_ascii() {
        let odd = "0x✓✓✓✓✓✓✓✓✓✓✓✓✓✓";
        assert_eq!(format_address(odd, 6, 4), odd);
    }

    #[test]
    fn test_truncate_address() {
        let addr = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";
        assert_eq!(truncate_address(addr), "0x71C7...976F");
    }
}
