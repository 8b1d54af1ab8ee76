use crate::ui;
use iced::widget::{button, column, container, pick_list, row, scrollable, text, text_input, Space};
use iced::{Element, Fill, Task};
use recycle_pickup::geocode::{GeocodeClient, Place};
use recycle_pickup::{
    filter_records, open_default_store, submit_request, Coordinates, ItemSlot, LocationPicker,
    Pagination, PickerPhase, RecordStore, RequestBuilder, RequestRecord, ResolveToken,
    StatusFilter, WasteCategory, HONG_KONG, MIN_PICKUP_NOTICE_DAYS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Main,
    AddRequest,
    Records,
}

#[derive(Debug, Clone)]
pub enum Message {
    ShowPage(Page),

    // Request form
    LocationChanged(String),
    PickupDateChanged(String),
    CategoryPicked(u64, WasteCategory),
    DescriptionChanged(u64, String),
    QuantityChanged(u64, String),
    PhotoChanged(u64, String),
    AddItemSlot,
    RemoveItemSlot(u64),
    Submit,

    // Location picker
    MapProbed(Result<(), String>),
    SearchPlaces,
    PlacesFound(Result<Vec<Place>, String>),
    PlacePicked(usize),
    LatitudeChanged(String),
    LongitudeChanged(String),
    PlaceMarker,
    AddressResolved(ResolveToken, Result<Option<String>, String>),

    // Records list
    SearchChanged(String),
    StatusFilterPicked(StatusFilter),
    LoadMore,
}

pub struct State {
    page: Page,
    store: RecordStore,
    form: RequestBuilder,
    picker: LocationPicker,
    geocoder: Option<GeocodeClient>,
    place_results: Vec<Place>,
    latitude_input: String,
    longitude_input: String,
    search: String,
    status_filter: StatusFilter,
    pagination: Pagination,
    status_message: String,
}

impl State {
    pub fn new() -> Self {
        Self {
            page: Page::Main,
            store: open_default_store(),
            form: RequestBuilder::new(),
            picker: LocationPicker::new(),
            geocoder: GeocodeClient::new(HONG_KONG).ok(),
            place_results: Vec::new(),
            latitude_input: String::new(),
            longitude_input: String::new(),
            search: String::new(),
            status_filter: StatusFilter::All,
            pagination: Pagination::new(),
            status_message: String::new(),
        }
    }
}

pub fn init() -> (State, Task<Message>) {
    let mut state = State::new();
    match state.geocoder.clone() {
        Some(client) => (
            state,
            Task::perform(probe_async(client), Message::MapProbed),
        ),
        None => {
            state.picker.mark_unavailable();
            (state, Task::none())
        }
    }
}

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::ShowPage(page) => {
            state.page = page;
            state.status_message.clear();
            if page == Page::Records {
                state.pagination.reset();
            }
            Task::none()
        }
        Message::LocationChanged(value) => {
            state.form.location = value;
            Task::none()
        }
        Message::PickupDateChanged(value) => {
            state.form.pickup_date = value;
            Task::none()
        }
        Message::CategoryPicked(id, category) => {
            if let Some(slot) = state.form.slot_mut(id) {
                slot.category = Some(category);
            }
            Task::none()
        }
        Message::DescriptionChanged(id, value) => {
            if let Some(slot) = state.form.slot_mut(id) {
                slot.description = value;
            }
            Task::none()
        }
        Message::QuantityChanged(id, value) => {
            if let Some(slot) = state.form.slot_mut(id) {
                slot.quantity = value;
            }
            Task::none()
        }
        Message::PhotoChanged(id, value) => {
            if let Some(slot) = state.form.slot_mut(id) {
                slot.photo_ref = value;
            }
            Task::none()
        }
        Message::AddItemSlot => {
            state.form.add_item_slot();
            Task::none()
        }
        Message::RemoveItemSlot(id) => {
            if let Err(e) = state.form.remove_item_slot(id) {
                state.status_message = e.to_string();
            }
            Task::none()
        }
        Message::Submit => {
            match submit_request(&state.form, &mut state.store) {
                Ok(record) => {
                    state.status_message =
                        format!("Request {} submitted successfully!", record.reference());
                    state.form.reset();
                    state.picker.clear();
                    state.place_results.clear();
                    state.latitude_input.clear();
                    state.longitude_input.clear();
                    state.page = Page::Main;
                }
                Err(e) => state.status_message = e.to_string(),
            }
            Task::none()
        }
        Message::MapProbed(result) => {
            match result {
                Ok(()) => state.picker.mark_ready(),
                Err(e) => {
                    tracing::warn!(error = %e, "geocoding collaborator unavailable");
                    state.picker.mark_unavailable();
                }
            }
            Task::none()
        }
        Message::SearchPlaces => {
            let query = state.form.location.trim().to_string();
            if query.is_empty() || state.picker.phase() != PickerPhase::Ready {
                return Task::none();
            }
            match state.geocoder.clone() {
                Some(client) => {
                    Task::perform(search_async(client, query), Message::PlacesFound)
                }
                None => Task::none(),
            }
        }
        Message::PlacesFound(result) => {
            match result {
                Ok(places) => {
                    if places.is_empty() {
                        state.status_message = "No places found for that search.".to_string();
                    }
                    state.place_results = places;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "place search failed");
                    state.status_message = format!("Place search failed: {e}");
                }
            }
            Task::none()
        }
        Message::PlacePicked(index) => {
            if let Some(place) = state.place_results.get(index) {
                if let Some(point) = place.coordinates() {
                    // The selection already carries its address, so no
                    // reverse-geocode round-trip is started here.
                    state.picker.apply_place(point);
                    state.form.coordinates = Some(point);
                    state.form.location = place.display_name.clone();
                    state.latitude_input = point.lat.to_string();
                    state.longitude_input = point.lng.to_string();
                }
            }
            state.place_results.clear();
            Task::none()
        }
        Message::LatitudeChanged(value) => {
            state.latitude_input = value;
            Task::none()
        }
        Message::LongitudeChanged(value) => {
            state.longitude_input = value;
            Task::none()
        }
        Message::PlaceMarker => {
            let (Ok(lat), Ok(lng)) = (
                state.latitude_input.trim().parse::<f64>(),
                state.longitude_input.trim().parse::<f64>(),
            ) else {
                state.status_message = "Coordinates must be decimal degrees.".to_string();
                return Task::none();
            };
            let point = Coordinates { lat, lng };
            if !HONG_KONG.bounds.contains(point) {
                state.status_message = "That point is outside the service area.".to_string();
                return Task::none();
            }

            let token = state.picker.place_marker(point);
            state.form.coordinates = Some(point);
            match state.geocoder.clone() {
                Some(client) if state.picker.phase() == PickerPhase::Ready => Task::perform(
                    reverse_async(client, point),
                    move |result| Message::AddressResolved(token, result),
                ),
                _ => Task::none(),
            }
        }
        Message::AddressResolved(token, result) => {
            if !state.picker.accept_address(token) {
                // The marker moved again before this response arrived.
                return Task::none();
            }
            match result {
                Ok(Some(address)) => state.form.location = address,
                Ok(None) => {}
                Err(e) => tracing::warn!(error = %e, "reverse geocode failed"),
            }
            Task::none()
        }
        Message::SearchChanged(value) => {
            state.search = value;
            Task::none()
        }
        Message::StatusFilterPicked(filter) => {
            state.status_filter = filter;
            Task::none()
        }
        Message::LoadMore => {
            state.pagination.load_more();
            Task::none()
        }
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    let body = match state.page {
        Page::Main => view_main(state),
        Page::AddRequest => view_add_request(state),
        Page::Records => view_records(state),
    };

    let mut content = column![view_nav(state.page)].spacing(5).padding(15);

    if !state.status_message.is_empty() {
        content = content.push(ui::notice(&state.status_message));
    }

    content = content.push(Space::new().height(10)).push(body);

    container(scrollable(content))
        .width(Fill)
        .height(Fill)
        .into()
}

fn view_nav(current: Page) -> Element<'static, Message> {
    row![
        text("Recycle Pickup")
            .size(26)
            .color(iced::Color::from_rgb(0.8, 1.0, 0.85)),
        Space::new().width(Fill),
        ui::nav_button("Home", Message::ShowPage(Page::Main), current == Page::Main),
        ui::nav_button(
            "New Request",
            Message::ShowPage(Page::AddRequest),
            current == Page::AddRequest,
        ),
        ui::nav_button(
            "My Requests",
            Message::ShowPage(Page::Records),
            current == Page::Records,
        ),
    ]
    .spacing(10)
    .align_y(iced::Alignment::Center)
    .into()
}

fn view_main(state: &State) -> Element<'_, Message> {
    container(
        column![
            text("Recycling pickup service for Hong Kong").size(20),
            text("Book a doorstep pickup for electronics, appliances and more, or browse your previous requests.")
                .size(14)
                .color(iced::Color::from_rgb(0.7, 0.7, 0.7)),
            ui::info_row("Saved requests:", ui::value_text(state.store.len())),
            row![
                button("Book a pickup")
                    .on_press(Message::ShowPage(Page::AddRequest))
                    .padding(10),
                button("View my requests")
                    .on_press(Message::ShowPage(Page::Records))
                    .padding(10),
            ]
            .spacing(10),
        ]
        .spacing(12)
        .padding(22),
    )
    .style(|theme| {
        ui::card_style(
            theme,
            iced::Color::from_rgb(0.15, 0.2, 0.25),
            iced::Color::from_rgb(0.3, 0.4, 0.5),
        )
    })
    .into()
}

fn view_add_request(state: &State) -> Element<'_, Message> {
    let mut content = column![text("New Pickup Request").size(22)]
        .spacing(12)
        .padding(22);

    content = content.push(view_location_section(state));
    content = content.push(Space::new().height(10));

    content = content.push(text("Items").size(18));
    for (position, slot) in state.form.slots().iter().enumerate() {
        content = content.push(view_item_slot(position, slot));
    }
    content = content.push(
        button("Add Another Item")
            .on_press(Message::AddItemSlot)
            .padding([8, 16]),
    );

    content = content.push(Space::new().height(10));
    content = content.push(ui::info_row(
        "Pickup date:",
        text_input("YYYY-MM-DD", &state.form.pickup_date)
            .on_input(Message::PickupDateChanged)
            .width(160),
    ));
    content = content.push(
        text(format!(
            "Earliest pickup is {MIN_PICKUP_NOTICE_DAYS} days from today."
        ))
        .size(12)
        .color(iced::Color::from_rgb(0.6, 0.6, 0.6)),
    );

    content = content.push(
        container(
            button("Submit Request")
                .on_press(Message::Submit)
                .padding(10),
        )
        .center_x(Fill),
    );

    container(content)
        .style(|theme| {
            ui::card_style(
                theme,
                iced::Color::from_rgb(0.15, 0.25, 0.2),
                iced::Color::from_rgb(0.3, 0.5, 0.4),
            )
        })
        .into()
}

fn view_location_section(state: &State) -> Element<'_, Message> {
    let mut section = column![text("Pickup Location").size(18)].spacing(10);

    let search_button = if state.picker.phase() == PickerPhase::Ready {
        button("Search").on_press(Message::SearchPlaces).padding([8, 16])
    } else {
        button("Search").padding([8, 16])
    };
    section = section.push(
        row![
            text_input("Address or place name", &state.form.location)
                .on_input(Message::LocationChanged)
                .on_submit(Message::SearchPlaces),
            search_button,
        ]
        .spacing(10)
        .align_y(iced::Alignment::Center),
    );

    match state.picker.phase() {
        PickerPhase::Uninitialized => {
            section = section.push(
                text("Checking map service...")
                    .size(13)
                    .color(iced::Color::from_rgb(0.6, 0.6, 0.6)),
            );
        }
        PickerPhase::Unavailable => {
            section = section.push(ui::map_error_panel());
        }
        PickerPhase::Ready => {
            for (index, place) in state.place_results.iter().enumerate() {
                section = section.push(
                    button(text(&place.display_name).size(13))
                        .on_press(Message::PlacePicked(index))
                        .padding([6, 10])
                        .width(Fill),
                );
            }

            section = section.push(
                row![
                    ui::label_text("Latitude:"),
                    text_input("22.3193", &state.latitude_input)
                        .on_input(Message::LatitudeChanged)
                        .width(120),
                    ui::label_text("Longitude:"),
                    text_input("114.1694", &state.longitude_input)
                        .on_input(Message::LongitudeChanged)
                        .width(120),
                    button("Drop marker")
                        .on_press(Message::PlaceMarker)
                        .padding([6, 12]),
                ]
                .spacing(10)
                .align_y(iced::Alignment::Center),
            );

            if let Some(marker) = state.picker.marker() {
                section = section.push(ui::info_row(
                    "Marker:",
                    text(format!("{:.5}, {:.5}", marker.lat, marker.lng)).size(14),
                ));
            }
        }
    }

    section.into()
}

fn view_item_slot(position: usize, slot: &ItemSlot) -> Element<'_, Message> {
    let id = slot.id();
    container(
        column![
            row![
                text(format!("Item {}", position + 1)).size(15),
                Space::new().width(Fill),
                button("Remove")
                    .on_press(Message::RemoveItemSlot(id))
                    .padding([5, 10]),
            ]
            .align_y(iced::Alignment::Center),
            ui::info_row(
                "Category:",
                pick_list(&WasteCategory::ALL[..], slot.category, move |category| {
                    Message::CategoryPicked(id, category)
                })
                .placeholder("Select waste category"),
            ),
            ui::info_row(
                "Description:",
                text_input("e.g. Plastic bottles, Cardboard", &slot.description)
                    .on_input(move |value| Message::DescriptionChanged(id, value)),
            ),
            ui::info_row(
                "Quantity:",
                text_input("1", &slot.quantity)
                    .on_input(move |value| Message::QuantityChanged(id, value))
                    .width(100),
            ),
            ui::info_row(
                "Photo (optional):",
                text_input("filename.jpg", &slot.photo_ref)
                    .on_input(move |value| Message::PhotoChanged(id, value)),
            ),
        ]
        .spacing(8)
        .padding(14),
    )
    .style(|theme| {
        ui::card_style(
            theme,
            iced::Color::from_rgb(0.13, 0.17, 0.17),
            iced::Color::from_rgb(0.3, 0.4, 0.4),
        )
    })
    .into()
}

fn view_records(state: &State) -> Element<'_, Message> {
    let filtered = filter_records(state.store.all(), state.status_filter, &state.search);

    let mut content = column![
        text("My Recycling Requests").size(22),
        row![
            text_input("Search location or items...", &state.search)
                .on_input(Message::SearchChanged),
            pick_list(
                &StatusFilter::OPTIONS[..],
                Some(state.status_filter),
                Message::StatusFilterPicked,
            ),
        ]
        .spacing(10)
        .align_y(iced::Alignment::Center),
    ]
    .spacing(12)
    .padding(22);

    if filtered.is_empty() {
        content = content.push(ui::empty_state());
    } else {
        for record in state.pagination.page(&filtered).iter().copied() {
            content = content.push(view_record_card(record));
        }

        let load_more = if state.pagination.exhausted(filtered.len()) {
            button("Load more").padding([8, 16])
        } else {
            button("Load more").on_press(Message::LoadMore).padding([8, 16])
        };
        content = content.push(container(load_more).center_x(Fill));
    }

    container(content)
        .style(|theme| {
            ui::card_style(
                theme,
                iced::Color::from_rgb(0.2, 0.15, 0.25),
                iced::Color::from_rgb(0.5, 0.3, 0.5),
            )
        })
        .into()
}

fn view_record_card(record: &RequestRecord) -> Element<'_, Message> {
    let type_count = record.items.len();

    let mut items = column![].spacing(4);
    for item in &record.items {
        items = items.push(
            row![
                text(format!(
                    "{} ({})",
                    item.description,
                    item.category.display_name()
                ))
                .size(13)
                .width(Fill),
                text(format!(
                    "{} {}",
                    item.quantity,
                    if item.quantity > 1 { "items" } else { "item" }
                ))
                .size(13),
            ]
            .spacing(10),
        );
    }

    container(
        column![
            row![
                text(format!("Request #{}", record.reference())).size(16),
                text(format!(
                    "Submitted on {}",
                    record.created_at.format("%b %e, %Y")
                ))
                .size(12)
                .color(iced::Color::from_rgb(0.6, 0.6, 0.6)),
                Space::new().width(Fill),
                ui::status_badge(record.status),
            ]
            .spacing(10)
            .align_y(iced::Alignment::Center),
            ui::info_row(
                "Pickup date:",
                ui::value_text(record.pickup_date.format("%b %e, %Y")),
            ),
            ui::info_row("Location:", text(&record.location).size(14)),
            ui::info_row(
                "Total items:",
                ui::value_text(format!(
                    "{} {} ({} total)",
                    type_count,
                    if type_count > 1 { "types" } else { "type" },
                    record.total_quantity(),
                )),
            ),
            text("Items Details").size(14),
            items,
        ]
        .spacing(8)
        .padding(16),
    )
    .style(|theme| {
        ui::card_style(
            theme,
            iced::Color::from_rgb(0.16, 0.16, 0.22),
            iced::Color::from_rgb(0.4, 0.4, 0.55),
        )
    })
    .into()
}

async fn probe_async(client: GeocodeClient) -> Result<(), String> {
    client.probe().await.map_err(|e| e.to_string())
}

async fn search_async(client: GeocodeClient, query: String) -> Result<Vec<Place>, String> {
    client.search(&query).await.map_err(|e| e.to_string())
}

async fn reverse_async(client: GeocodeClient, point: Coordinates) -> Result<Option<String>, String> {
    client.reverse(point).await.map_err(|e| e.to_string())
}
