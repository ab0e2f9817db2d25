use iced::widget::{column, container, image, keyed_column, text};
use iced::{Alignment, Element, Length};

use crate::Message;
use page_viewer::assets::AssetIndex;
use page_viewer::config::ViewerConfig;
use page_viewer::Page;

/// Full-size view of the selected page
///
/// Pinch, scroll-wheel zoom and drag panning are handled by iced's image
/// viewer; we only pass it the zoom limits from the config.
///
/// The viewer sits under a key of (page id, zoom generation). A new key
/// gives it fresh widget state, so zoom and pan start over when the page
/// changes or the generation is bumped.
pub fn page_view<'a>(
    page: Option<&'a Page>,
    assets: &AssetIndex,
    config: &ViewerConfig,
    zoom_generation: u64,
) -> Element<'a, Message> {
    let Some(page) = page else {
        return placeholder(text("No pages in catalog").size(20).into());
    };

    match assets.page_assets(page).image {
        Some(path) => {
            let viewer = image::Viewer::<image::Handle>::new(image::Handle::from_path(path))
                .width(Length::Fill)
                .height(Length::Fill)
                .min_scale(config.min_scale)
                .max_scale(config.max_scale)
                .scale_step(config.scale_step);
            let viewer: Element<'a, Message> = viewer.into();

            keyed_column([((page.id(), zoom_generation), viewer)])
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
        None => placeholder(
            column![
                text(format!("Image '{}' not found", page.image_name())).size(20),
                text(format!("Looked in {}", config.assets_dir.display())).size(14),
            ]
            .spacing(8)
            .align_x(Alignment::Center)
            .into(),
        ),
    }
}

fn placeholder(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
