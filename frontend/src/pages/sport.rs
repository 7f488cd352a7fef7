use yew::prelude::*;

use crate::components::slot_booking::SlotBooking;

#[derive(Properties, PartialEq)]
pub struct SportPageProps {
    pub sport: String,
}

fn display_name(sport: &str) -> String {
    let mut chars = sport.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[function_component(SportPage)]
pub fn sport_page(props: &SportPageProps) -> Html {
    html! {
        <div class="sport-page" data-sport={props.sport.clone()}>
            <section class="sport-hero">
                <h1>{ format!("Book a {} slot", display_name(&props.sport)) }</h1>
                <p class="hero-subtitle">{"Pick a day, tap the hours you want and pay in one go."}</p>
            </section>
            <section class="booking">
                <SlotBooking sport={props.sport.clone()} />
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_capitalizes_first_letter() {
        assert_eq!(display_name("cricket"), "Cricket");
        assert_eq!(display_name(""), "");
    }
}
