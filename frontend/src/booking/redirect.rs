use serde::{Deserialize, Serialize};

/// Where confirming a booking sends the user. The payment page reads the same
/// fields back out of its query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRedirect {
    pub sport: String,
    pub amount: u32,
}

impl PaymentRedirect {
    pub fn to_url(&self, destination: &str) -> String {
        format!(
            "{}?sport={}&amount={}",
            destination,
            urlencoding::encode(&self.sport),
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_carries_sport_and_amount() {
        let redirect = PaymentRedirect {
            sport: "cricket".to_string(),
            amount: 1100,
        };
        assert_eq!(redirect.to_url("payment.html"), "payment.html?sport=cricket&amount=1100");
    }

    #[test]
    fn sport_is_url_encoded() {
        let redirect = PaymentRedirect {
            sport: "table tennis&co".to_string(),
            amount: 2200,
        };
        assert_eq!(
            redirect.to_url("/payment"),
            "/payment?sport=table%20tennis%26co&amount=2200"
        );
    }
}
