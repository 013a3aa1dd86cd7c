#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    NextClick,
    PreviousClick,
    FirstClick,
    LastClick,
    NextCase,
    PreviousCase,
}
