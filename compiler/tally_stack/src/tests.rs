use super::*;

#[test]
fn test_deep_recursion_grows_stack() {
    fn nest(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { nest(n - 1) + 1 })
    }

    assert_eq!(nest(100_000), 100_000);
}

#[test]
fn test_returns_closure_result() {
    let result: Result<i32, &str> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(result, Ok(7));
}

#[test]
fn test_call_depth_limit() {
    let mut depth = CallDepth::new(2);
    assert_eq!(depth.enter(), Ok(()));
    assert_eq!(depth.enter(), Ok(()));
    assert_eq!(depth.enter(), Err(DepthExceeded { limit: 2 }));
    assert_eq!(depth.depth(), 2);

    depth.exit();
    assert_eq!(depth.depth(), 1);
    assert_eq!(depth.enter(), Ok(()));
}

#[test]
fn test_call_depth_exit_saturates() {
    let mut depth = CallDepth::default();
    depth.exit();
    assert_eq!(depth.depth(), 0);
    assert_eq!(depth.limit(), DEFAULT_MAX_CALL_DEPTH);
}

#[test]
fn test_depth_exceeded_message() {
    assert_eq!(
        DepthExceeded { limit: 8 }.to_string(),
        "maximum call depth exceeded (limit: 8)"
    );
}
