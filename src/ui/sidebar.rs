use iced::widget::{button, column, container, image, keyed_column, scrollable, text};
use iced::{Alignment, Element, Length, Theme};

use crate::Message;
use page_viewer::assets::AssetIndex;
use page_viewer::{Page, PageCatalog};

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

/// Thumbnail list for every page in the catalog.
///
/// Tiles are keyed by page id so iced keeps widget state attached to the
/// right page.
pub fn sidebar<'a>(
    catalog: &'a PageCatalog,
    assets: &AssetIndex,
    selected: Option<i64>,
    tile_size: f32,
) -> Element<'a, Message> {
    let tiles = keyed_column(catalog.iter().map(|page| {
        let is_selected = selected == Some(page.id());
        (page.id(), tile(page, assets, is_selected, tile_size))
    }))
    .spacing(10)
    .padding(10);

    scrollable(tiles)
        .width(Length::Fixed(tile_size + 48.0))
        .height(Length::Fill)
        .into()
}

fn tile<'a>(
    page: &'a Page,
    assets: &AssetIndex,
    is_selected: bool,
    size: f32,
) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match assets.page_assets(page).thumbnail {
        Some(path) => image(image::Handle::from_path(path))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into(),
        // No file on disk yet, show the resource name instead
        None => container(text(page.thumbnail_name()).size(11))
            .center_x(Length::Fixed(size))
            .center_y(Length::Fixed(size))
            .into(),
    };

    let style: ButtonStyle = if is_selected {
        button::primary
    } else {
        button::secondary
    };

    button(
        column![preview, text(format!("Page {}", page.id())).size(12)]
            .spacing(4)
            .align_x(Alignment::Center),
    )
    .on_press(Message::SelectPage(page.id()))
    .style(style)
    .padding(6)
    .into()
}
