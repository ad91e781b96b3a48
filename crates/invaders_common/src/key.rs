/// Logical keys surfaced by a frontend.
///
/// Frontends map their native keycodes onto this set; anything else arrives
/// as `Key::None`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    A,
    D,
    P,
    Q,
    W,
    Left,
    Right,
    Up,
    Space,
    Escape,
    None,
}
