//! Pointer event types and translation from crossterm.
//!
//! The grid never consumes crossterm events directly; the host translates
//! them into these types (see [`PointerEvent::from_mouse`]) and dispatches
//! them to the widget. This keeps the widget layer testable without a
//! terminal.

/// Keyboard modifiers active during a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

/// A terminal cell coordinate, zero-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// A button press at a cell position.
///
/// The button is carried through so widgets can route presses themselves;
/// the grid acts on [`MouseButton::Left`] only.
#[derive(Debug, Clone, Copy)]
pub struct ClickEvent {
    pub button: MouseButton,
    pub position: Position,
    pub modifiers: Modifiers,
}

impl ClickEvent {
    pub const fn new(button: MouseButton, position: Position, modifiers: Modifiers) -> Self {
        Self {
            button,
            position,
            modifiers,
        }
    }
}

/// Which way the wheel moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Wheel movement at a cell position.
#[derive(Debug, Clone, Copy)]
pub struct ScrollEvent {
    pub direction: ScrollDirection,
    pub position: Position,
    /// Lines (or columns) covered by the movement.
    pub amount: u16,
}

impl ScrollEvent {
    /// A single wheel notch in the given direction.
    pub const fn notch(direction: ScrollDirection, position: Position) -> Self {
        Self {
            direction,
            position,
            amount: 1,
        }
    }
}

/// One pointer interaction, as the grid consumes it.
///
/// `Drag` is emitted for every motion event while a button is held and
/// `Release` when it is let go; widgets that track drags (column resizing,
/// scrollbar thumbs) see the full press/move/release cycle.
#[derive(Debug, Clone, Copy)]
pub enum PointerEvent {
    /// Button pressed.
    Click(ClickEvent),
    /// Motion with no button held.
    Move(Position),
    /// Motion while a button is held.
    Drag(Position),
    /// Button released.
    Release(Position),
    /// Wheel scrolled.
    Scroll(ScrollEvent),
}

impl PointerEvent {
    /// Translate a crossterm mouse event.
    ///
    /// Returns `None` for events the grid has no use for (middle-button
    /// presses, drags with a secondary button held).
    pub fn from_mouse(ev: crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::MouseEventKind;

        let position = Position::new(ev.column, ev.row);
        let modifiers = Modifiers::from(ev.modifiers);

        match ev.kind {
            MouseEventKind::Down(btn) => match MouseButton::from(btn) {
                MouseButton::Middle => {
                    log::trace!("[events] ignoring middle-button press at {position:?}");
                    None
                }
                button => Some(Self::Click(ClickEvent::new(button, position, modifiers))),
            },
            MouseEventKind::Drag(btn) => {
                (MouseButton::from(btn) == MouseButton::Left).then_some(Self::Drag(position))
            }
            MouseEventKind::Up(_) => Some(Self::Release(position)),
            MouseEventKind::Moved => Some(Self::Move(position)),
            MouseEventKind::ScrollUp => Some(Self::Scroll(ScrollEvent::notch(
                ScrollDirection::Up,
                position,
            ))),
            MouseEventKind::ScrollDown => Some(Self::Scroll(ScrollEvent::notch(
                ScrollDirection::Down,
                position,
            ))),
            MouseEventKind::ScrollLeft => Some(Self::Scroll(ScrollEvent::notch(
                ScrollDirection::Left,
                position,
            ))),
            MouseEventKind::ScrollRight => Some(Self::Scroll(ScrollEvent::notch(
                ScrollDirection::Right,
                position,
            ))),
        }
    }
}
