/// State of one grid position.
///
/// Transitions are one-way: `Water -> Ship` during placement,
/// `Water -> Miss` and `Ship -> Hit` during shooting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Water,
    Ship,
    Hit,
    Miss,
}
