use yew::prelude::*;

use crate::booking::pricing::PaymentSummary;

#[derive(Properties, PartialEq)]
pub struct PaymentPopupProps {
    pub summary: PaymentSummary,
    pub on_confirm: Callback<MouseEvent>,
    pub on_close: Callback<MouseEvent>,
}

#[function_component(PaymentPopup)]
pub fn payment_popup(props: &PaymentPopupProps) -> Html {
    let PaymentPopupProps { summary, on_confirm, on_close } = props;

    html! {
        <div id="paymentModal" class="payment-modal">
            <div class="payment-content">
                <button class="close-btn" onclick={on_close.clone()}>{"✕"}</button>
                <h3>{"Your booking"}</h3>
                <p>
                    {"Time: "}
                    <span id="selectedTime">{ summary.time_range() }</span>
                </p>
                if !summary.contiguous {
                    <p class="payment-note">
                        { format!("{} separate hours selected within this range", summary.slot_count) }
                    </p>
                }
                <p>
                    {"Total: ₹"}
                    <span id="totalPrice">{ summary.total.to_string() }</span>
                </p>
                <button id="confirmPayment" class="confirm-btn" onclick={on_confirm.clone()}>
                    {"Confirm & Pay"}
                </button>
            </div>
        </div>
    }
}
