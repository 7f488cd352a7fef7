use log::{info, warn};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::booking::dates::{self, DateOption};
use crate::booking::slots::{Hour, TimeSlot};
use crate::booking::source::BookedTable;
use crate::booking::widget::{BookingWidget, ToggleOutcome};
use crate::bookings_api::fetch_booked_table;
use crate::components::payment_popup::PaymentPopup;
use crate::config::BookingConfig;

#[derive(Properties, PartialEq)]
pub struct SlotBookingProps {
    pub sport: String,
}

pub enum BookingMsg {
    DateChanged(String),
    SlotToggled(Hour),
    Confirm,
    Dismiss,
    BookingsLoaded(BookedTable),
    BookingsFailed(String),
}

pub struct SlotBooking {
    widget: BookingWidget<BookedTable>,
    dates: Vec<DateOption>,
}

impl Component for SlotBooking {
    type Message = BookingMsg;
    type Properties = SlotBookingProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = BookingConfig::default();
        let today = dates::today();
        let days = config.days_ahead;

        ctx.link().send_future(async move {
            match fetch_booked_table(today, days).await {
                Ok(table) => BookingMsg::BookingsLoaded(table),
                Err(e) => BookingMsg::BookingsFailed(e.to_string()),
            }
        });

        Self {
            dates: dates::upcoming_dates(today, days),
            widget: BookingWidget::new(BookedTable::seed(), config, ctx.props().sport.clone(), today),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            BookingMsg::DateChanged(value) => match dates::parse_date(&value) {
                Ok(date) => {
                    info!("Date changed to {}", date);
                    self.widget.on_date_changed(date);
                    true
                }
                Err(e) => {
                    warn!("Ignoring date change: {}", e);
                    false
                }
            },
            BookingMsg::SlotToggled(hour) => {
                self.widget.on_slot_toggled(hour) != ToggleOutcome::Ignored
            }
            BookingMsg::Confirm => {
                if let Some(redirect) = self.widget.on_confirm() {
                    let url = redirect.to_url(&self.widget.config().payment_destination);
                    info!("Confirming booking, redirecting to {}", url);
                    if let Some(window) = web_sys::window() {
                        if let Err(e) = window.location().set_href(&url) {
                            warn!("Failed to navigate to {}: {:?}", url, e);
                        }
                    }
                }
                false
            }
            BookingMsg::Dismiss => {
                self.widget.dismiss_summary();
                true
            }
            BookingMsg::BookingsLoaded(table) => {
                info!("Loaded booked slots for {} dates", table.len());
                self.widget.set_source(table);
                true
            }
            BookingMsg::BookingsFailed(error) => {
                warn!("Using bundled booked slots: {}", error);
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().sport != old_props.sport {
            self.widget.set_sport(ctx.props().sport.clone());
            true
        } else {
            false
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let active_value = self.widget.active_date().format(dates::ISO_DATE_FORMAT).to_string();
        let on_date_change = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            BookingMsg::DateChanged(select.value())
        });

        let popup = match self.widget.summary() {
            Some(summary) if self.widget.is_summary_visible() => html! {
                <PaymentPopup
                    summary={summary}
                    on_confirm={ctx.link().callback(|_: MouseEvent| BookingMsg::Confirm)}
                    on_close={ctx.link().callback(|_: MouseEvent| BookingMsg::Dismiss)}
                />
            },
            _ => html! {},
        };

        html! {
            <div class="booking-section">
                <div class="date-picker">
                    <label for="dateSelector">{"Pick a date"}</label>
                    <select id="dateSelector" onchange={on_date_change}>
                        { for self.dates.iter().map(|option| {
                            let value = option.value();
                            let selected = value == active_value;
                            html! {
                                <option value={value} selected={selected}>{ &option.label }</option>
                            }
                        }) }
                    </select>
                </div>

                <div id="slotsWrapper" class="slots-wrapper">
                    { for self.widget.slots().iter().map(|slot| self.render_slot(ctx, slot)) }
                </div>

                { popup }
            </div>
        }
    }
}

impl SlotBooking {
    fn render_slot(&self, ctx: &Context<Self>, slot: &TimeSlot) -> Html {
        let hour = slot.hour;
        let onclick = slot
            .status
            .is_interactive()
            .then(|| ctx.link().callback(move |_: MouseEvent| BookingMsg::SlotToggled(hour)));

        html! {
            <div
                class={classes!("slot", slot.status.css_class())}
                data-hour={hour.key()}
                onclick={onclick}
            >
                { &slot.label }
            </div>
        }
    }
}
