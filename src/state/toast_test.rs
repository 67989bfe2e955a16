use super::*;

// =============================================================
// Toast queue
// =============================================================

#[test]
fn push_appends_in_order() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "Saved");
    state.push(ToastKind::Error, "Failed");
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].message, "Saved");
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn push_returns_unique_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "one");
    let b = state.push(ToastKind::Info, "two");
    assert_ne!(a, b);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "one");
    let b = state.push(ToastKind::Warning, "two");

    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);

    // Dismissing an unknown id is harmless.
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn kind_classes_are_distinct() {
    let classes = [
        ToastKind::Success.class(),
        ToastKind::Error.class(),
        ToastKind::Warning.class(),
        ToastKind::Info.class(),
    ];
    for (i, a) in classes.iter().enumerate() {
        for b in classes.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}
