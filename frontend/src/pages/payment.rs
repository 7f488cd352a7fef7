use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::booking::redirect::PaymentRedirect;
use crate::Route;

#[function_component(PaymentPage)]
pub fn payment_page() -> Html {
    let location = use_location();
    let payment = location.and_then(|l| match l.query::<PaymentRedirect>() {
        Ok(payment) => Some(payment),
        Err(e) => {
            warn!("Payment page opened without a valid booking: {}", e);
            None
        }
    });

    html! {
        <div class="payment-page">
            {
                match payment {
                    Some(payment) => html! {
                        <>
                            <h1>{"Payment"}</h1>
                            <p>{ format!("Sport: {}", payment.sport) }</p>
                            <p class="payment-amount">{ format!("Amount due: ₹{}", payment.amount) }</p>
                        </>
                    },
                    None => html! {
                        <>
                            <h1>{"Nothing to pay"}</h1>
                            <p>{"Pick your slots first."}</p>
                        </>
                    },
                }
            }
            <Link<Route> to={Route::Home} classes="forward-link">
                {"Back to booking"}
            </Link<Route>>
        </div>
    }
}
