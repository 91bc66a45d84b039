use std::error::Error;
use std::fmt;

use wrappable_core::{ErrorRef, Formatted, IntoCause, Message, errorf};

#[test]
fn clones_share_identity() {
    let eof = ErrorRef::msg("EOF");
    let copy = eof.clone();

    assert_eq!(eof, copy);
    assert!(eof.ptr_eq(&copy));
    assert!(copy.points_to(eof.as_fault()));
}

#[test]
fn equal_messages_are_distinct() {
    let a = ErrorRef::msg("EOF");
    let b = ErrorRef::msg("EOF");

    assert_eq!(a.to_string(), b.to_string());
    assert_ne!(a, b);

    let message = Message::new("EOF");
    assert_ne!(ErrorRef::new(message.clone()), ErrorRef::new(message));
}

#[test]
fn foreign_errors_downcast_to_their_own_type() {
    let err = ErrorRef::from_std(fmt::Error);

    assert!(err.downcast_ref::<fmt::Error>().is_some());
    assert!(err.downcast_ref::<Message>().is_none());
    assert!(err.unwrap_once().is_none());
    assert_eq!(err.to_string(), fmt::Error.to_string());
}

#[test]
fn display_and_debug_forward_to_the_fault() {
    let err = ErrorRef::msg("disk full");

    assert_eq!(err.to_string(), "disk full");
    assert_eq!(format!("{err:?}"), format!("{:?}", Message::new("disk full")));
}

#[test]
fn formatted_errors_expose_what_they_wrap() {
    let inner = ErrorRef::msg("closed pipe");
    let outer = errorf!(wraps: inner.clone(), "flush: {}", inner);

    assert_eq!(outer.to_string(), "flush: closed pipe");
    assert_eq!(outer.unwrap_once(), Some(inner.clone()));
    assert!(outer.as_unwrappable().is_some());

    let source = outer.source().expect("wrapped error is the source");
    assert_eq!(source.to_string(), "closed pipe");

    let formatted = outer.downcast_ref::<Formatted>().expect("formatted error");
    assert_eq!(formatted.wrapped().as_ref(), Some(&inner));
}

#[test]
fn formatted_errors_without_a_cause_are_leaves() {
    let plain = errorf!("status {}", 503);

    assert_eq!(plain.to_string(), "status 503");
    assert!(plain.as_unwrappable().is_none());
    assert!(plain.unwrap_once().is_none());
    assert!(plain.source().is_none());
}

#[test]
fn plain_messages_have_no_capabilities() {
    let err = ErrorRef::msg("leaf");

    assert!(err.as_unwrappable().is_none());
    assert!(err.as_headed().is_none());
    assert!(err.as_appendable().is_none());
    assert!(err.as_self_matching().is_none());
    assert!(err.as_self_extracting().is_none());
    assert!(err.as_root_aware().is_none());
    assert!(err.topmost().is_none());
}

#[test]
fn absent_cause_converts_to_nothing() {
    let eof = ErrorRef::msg("EOF");

    assert_eq!(None::<ErrorRef>.into_cause(), None);
    assert_eq!(Some(eof.clone()).into_cause(), Some(eof.clone()));
    assert_eq!((&eof).into_cause(), Some(eof.clone()));
    assert!(Message::new("fresh").into_cause().is_some_and(|err| err != eof));
}
