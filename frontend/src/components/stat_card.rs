use yew::prelude::*;

use crate::format::format_idr;

const POSITIVE_COLOR: &str = "#00C49F";
const NEGATIVE_COLOR: &str = "#FF3333";

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub amount: f64,
    pub color: &'static str,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="card stat-card">
            <h3>{ props.title }</h3>
            <p class="stat-amount" style={format!("color: {}", props.color)}>{ format_idr(props.amount) }</p>
        </div>
    }
}

/// Green for a balance at or above zero, red below.
pub fn balance_color(net: f64) -> &'static str {
    if net >= 0.0 {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_balance_counts_as_positive() {
        assert_eq!(balance_color(0.0), POSITIVE_COLOR);
        assert_eq!(balance_color(-1.0), NEGATIVE_COLOR);
    }
}
