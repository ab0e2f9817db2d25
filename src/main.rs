use iced::keyboard::{self, key, Key, Modifiers};
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod ui;

use page_viewer::assets::{self, AssetIndex};
use page_viewer::config::ViewerConfig;
use page_viewer::{Page, PageCatalog};

/// Main application state
struct PageViewer {
    /// The fixed page list
    catalog: &'static PageCatalog,
    /// Image files found in the asset folder (empty until the scan finishes)
    assets: AssetIndex,
    config: ViewerConfig,
    /// Id of the page shown in the main view
    selected: Option<i64>,
    /// Status message to display to the user
    status: String,
    /// Whether the thumbnail drawer is shown
    sidebar_open: bool,
    /// Bumped to throw away the page view's zoom and pan
    zoom_generation: u64,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked a thumbnail
    SelectPage(i64),
    NextPage,
    PreviousPage,
    /// Show or hide the thumbnail drawer
    ToggleSidebar,
    /// Return the page view to its fitted zoom
    ResetZoom,
    /// Background asset scan completed
    AssetsScanned(AssetIndex),
}

impl PageViewer {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        Self::with_config(PageCatalog::builtin(), ViewerConfig::load())
    }

    fn with_config(catalog: &'static PageCatalog, config: ViewerConfig) -> (Self, Task<Message>) {
        tracing::info!("Page viewer initialized with {} pages", catalog.len());

        let status = format!("Scanning {}...", config.assets_dir.display());
        let scan = Task::perform(
            assets::scan_async(config.assets_dir.clone()),
            Message::AssetsScanned,
        );

        (
            PageViewer {
                catalog,
                assets: AssetIndex::default(),
                config,
                selected: catalog.first().map(Page::id),
                status,
                sidebar_open: true,
                zoom_generation: 0,
            },
            scan,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectPage(id) => {
                if self.catalog.get(id).is_some() {
                    self.selected = Some(id);
                } else {
                    tracing::warn!("Ignoring selection of unknown page {}", id);
                }
            }
            Message::NextPage => {
                if let Some(next) = self.selected.and_then(|id| self.catalog.next_after(id)) {
                    self.selected = Some(next.id());
                }
            }
            Message::PreviousPage => {
                if let Some(prev) = self.selected.and_then(|id| self.catalog.previous_before(id)) {
                    self.selected = Some(prev.id());
                }
            }
            Message::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
            }
            Message::ResetZoom => {
                self.zoom_generation = self.zoom_generation.wrapping_add(1);
            }
            Message::AssetsScanned(index) => {
                let missing: Vec<&str> = self
                    .catalog
                    .iter()
                    .filter(|page| index.resolve(page.image_name()).is_none())
                    .map(Page::image_name)
                    .collect();

                self.status = if missing.is_empty() {
                    format!("Ready. All {} pages found.", self.catalog.len())
                } else {
                    tracing::warn!("Missing page images: {}", missing.join(", "));
                    format!("{} of {} page images missing.", missing.len(), self.catalog.len())
                };

                self.assets = index;
            }
        }

        Task::none()
    }

    fn selected_page(&self) -> Option<&'static Page> {
        self.selected.and_then(|id| self.catalog.get(id))
    }

    /// "Page 1 of 2" style counter for the header
    fn page_counter(&self) -> String {
        match self.selected.and_then(|id| self.catalog.position(id)) {
            Some(index) => format!("Page {} of {}", index + 1, self.catalog.len()),
            None => String::from("No page selected"),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page = self.selected_page();
        let has_previous = page.and_then(|p| self.catalog.previous_before(p.id())).is_some();
        let has_next = page.and_then(|p| self.catalog.next_after(p.id())).is_some();

        let header = row![
            button("Previous")
                .on_press_maybe(has_previous.then_some(Message::PreviousPage))
                .padding(8),
            text(self.page_counter()).size(18),
            button("Next")
                .on_press_maybe(has_next.then_some(Message::NextPage))
                .padding(8),
            button("Reset zoom").on_press(Message::ResetZoom).padding(8),
            button(if self.sidebar_open { "Hide pages" } else { "Show pages" })
                .on_press(Message::ToggleSidebar)
                .padding(8),
            text(&self.status).size(14),
        ]
        .spacing(20)
        .align_y(Alignment::Center);

        let mut body = row![].spacing(20);
        if self.sidebar_open {
            body = body.push(ui::sidebar::sidebar(
                self.catalog,
                &self.assets,
                self.selected,
                self.config.thumbnail_size,
            ));
        }
        let body = body.push(ui::page_view::page_view(
            page,
            &self.assets,
            &self.config,
            self.zoom_generation,
        ));

        container(column![header, body].spacing(20).padding(20))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Arrow keys flip through the pages, `0`/`r` reset zoom, `s` toggles the drawer
    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(handle_key)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn handle_key(key: Key, _modifiers: Modifiers) -> Option<Message> {
    match key.as_ref() {
        Key::Named(key::Named::ArrowRight) => Some(Message::NextPage),
        Key::Named(key::Named::ArrowLeft) => Some(Message::PreviousPage),
        Key::Character("0" | "r") => Some(Message::ResetZoom),
        Key::Character("s") => Some(Message::ToggleSidebar),
        _ => None,
    }
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "page_viewer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    iced::application("Page Viewer", PageViewer::update, PageViewer::view)
        .subscription(PageViewer::subscription)
        .theme(PageViewer::theme)
        .window_size((1100.0, 760.0))
        .centered()
        .run_with(PageViewer::new)
}
