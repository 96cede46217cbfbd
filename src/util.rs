use std::error::Error;

/// Render an error and all of its sources as a single line:
/// `"outer: cause: root cause"`
pub(crate) fn error_chain(e: &dyn Error) -> String {
    let mut msg = e.to_string();
    let mut source = e.source();
    while let Some(src) = source {
        msg.push_str(": ");
        msg.push_str(&src.to_string());
        source = src.source();
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("outer")]
    struct Outer(#[source] Middle);

    #[derive(Debug, Error)]
    #[error("middle")]
    struct Middle(#[source] std::io::Error);

    #[test]
    fn chain() {
        let e = Outer(Middle(std::io::Error::other("root")));
        assert_eq!(error_chain(&e), "outer: middle: root");
    }

    #[test]
    fn no_source() {
        let e = std::io::Error::other("alone");
        assert_eq!(error_chain(&e), "alone");
    }
}
