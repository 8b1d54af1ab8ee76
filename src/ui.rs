use iced::widget::{button, column, container, row, text};
use iced::{Color, Element, Fill};
use recycle_pickup::RequestStatus;

pub fn label_text(label: &str) -> text::Text<'_> {
    text(label).size(15).color(Color::from_rgb(0.7, 0.7, 0.7))
}

pub fn value_text(value: impl ToString) -> text::Text<'static> {
    text(value.to_string()).size(18)
}

pub fn info_row<'a, M: 'a>(
    label: &'a str,
    value: impl Into<Element<'a, M>>,
) -> iced::widget::Row<'a, M> {
    row![label_text(label).width(130), value.into()]
        .spacing(10)
        .align_y(iced::Alignment::Center)
}

pub fn card_style(_theme: &iced::Theme, bg_color: Color, border_color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn notice<M: 'static>(message: &str) -> container::Container<'_, M> {
    container(text(message).size(14))
        .padding(12)
        .width(Fill)
        .style(|_| container::Style {
            background: Some(iced::Background::Color(Color::from_rgb(0.2, 0.25, 0.15))),
            border: iced::Border {
                color: Color::from_rgb(0.5, 0.6, 0.3),
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        })
}

pub fn nav_button<M: Clone + 'static>(
    label: &'static str,
    on_press: M,
    active: bool,
) -> button::Button<'static, M> {
    button(label)
        .on_press(on_press)
        .padding([8, 16])
        .style(move |_theme, status| {
            let base_color = if active {
                Color::from_rgb(0.2, 0.4, 0.3)
            } else {
                match status {
                    button::Status::Hovered => Color::from_rgb(0.25, 0.3, 0.28),
                    _ => Color::from_rgb(0.18, 0.2, 0.2),
                }
            };
            button::Style {
                background: Some(iced::Background::Color(base_color)),
                text_color: Color::WHITE,
                border: iced::Border {
                    radius: 6.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
}

pub fn status_badge<'a, M: 'a>(status: RequestStatus) -> container::Container<'a, M> {
    let (bg_color, border_color) = match status {
        RequestStatus::Pending => (Color::from_rgb(0.3, 0.25, 0.1), Color::from_rgb(0.7, 0.6, 0.2)),
        RequestStatus::Confirmed => (Color::from_rgb(0.12, 0.2, 0.3), Color::from_rgb(0.3, 0.5, 0.7)),
        RequestStatus::Completed => (Color::from_rgb(0.12, 0.28, 0.15), Color::from_rgb(0.3, 0.65, 0.35)),
        RequestStatus::Cancelled => (Color::from_rgb(0.3, 0.12, 0.12), Color::from_rgb(0.7, 0.3, 0.3)),
    };
    container(text(status.display_name()).size(13))
        .padding([4, 10])
        .style(move |_| container::Style {
            background: Some(iced::Background::Color(bg_color)),
            border: iced::Border {
                color: border_color,
                width: 1.0,
                radius: 10.0.into(),
            },
            ..Default::default()
        })
}

pub fn empty_state<'a, M: 'a>() -> container::Container<'a, M> {
    container(
        column![
            text("No recycling requests found").size(16),
            text("Submitted requests will show up here.")
                .size(13)
                .color(Color::from_rgb(0.6, 0.6, 0.6)),
        ]
        .spacing(6)
        .align_x(iced::Alignment::Center),
    )
    .padding(30)
    .center_x(Fill)
    .style(container::rounded_box)
}

pub fn map_error_panel<'a, M: 'a>() -> container::Container<'a, M> {
    container(
        text("Unable to reach the map service. Please enter the pickup address manually.")
            .size(13)
            .color(Color::from_rgb(1.0, 0.6, 0.6)),
    )
    .padding(12)
    .width(Fill)
    .style(|_| container::Style {
        background: Some(iced::Background::Color(Color::from_rgb(0.3, 0.15, 0.15))),
        border: iced::Border {
            color: Color::from_rgb(0.6, 0.3, 0.3),
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    })
}
