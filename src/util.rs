use ratatui::layout::{Flex, Layout, Rect, Size};

/// Center a `size`-sized rectangle within `area`, clipping it when `area` is
/// too small to hold it.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width]).flex(Flex::Center).areas(area);
    let [rect] = Layout::vertical([size.height]).flex(Flex::Center).areas(rect);
    rect
}
