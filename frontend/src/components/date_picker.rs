use chrono::{Datelike, NaiveDate};
use yew::prelude::*;

use crate::services::date_utils::*;

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
    pub selected: Option<NaiveDate>,
    /// First and last selectable day, inclusive
    pub window: (NaiveDate, NaiveDate),
    pub on_select: Callback<NaiveDate>,
}

/// Inline month calendar limited to the booking window
#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    let (min, max) = props.window;
    let initial = props.selected.unwrap_or(min);
    let visible_month = use_state(|| (initial.year(), initial.month()));
    let (year, month) = *visible_month;

    let can_go_back = (year, month) > (min.year(), min.month());
    let can_go_forward = (year, month) < (max.year(), max.month());

    let prev_month = {
        let visible_month = visible_month.clone();
        Callback::from(move |_: MouseEvent| {
            let (year, month) = *visible_month;
            visible_month.set(shift_month(year, month, -1));
        })
    };

    let next_month = {
        let visible_month = visible_month.clone();
        Callback::from(move |_: MouseEvent| {
            let (year, month) = *visible_month;
            visible_month.set(shift_month(year, month, 1));
        })
    };

    let days = calendar_days(year, month, props.window);

    html! {
        <div class="card">
            <h2 class="card-header">{"Selecione uma data"}</h2>
            <div class="calendar">
                <div class="calendar-header">
                    <button type="button" class="nav-button" onclick={prev_month} disabled={!can_go_back}>{"‹"}</button>
                    <span class="month-year">{format!("{} {}", month_name(month), year)}</span>
                    <button type="button" class="nav-button" onclick={next_month} disabled={!can_go_forward}>{"›"}</button>
                </div>

                <div class="calendar-grid">
                    <div class="weekday-header">
                        {for WEEKDAY_LABELS.iter().map(|label| html! { <span>{*label}</span> })}
                    </div>

                    <div class="calendar-days">
                        {for days.iter().map(|day| {
                            let date = day.date;
                            let is_selected = props.selected == Some(date);
                            let is_today = date == min;
                            let onclick = {
                                let on_select = props.on_select.clone();
                                Callback::from(move |_: MouseEvent| on_select.emit(date))
                            };

                            html! {
                                <button
                                    type="button"
                                    class={classes!(
                                        "calendar-day",
                                        day.is_current_month.then_some("current-month"),
                                        (!day.is_current_month).then_some("other-month"),
                                        (!day.is_selectable).then_some("invalid"),
                                        is_selected.then_some("selected"),
                                        is_today.then_some("today")
                                    )}
                                    disabled={!day.is_selectable}
                                    {onclick}
                                >
                                    {day.day()}
                                </button>
                            }
                        })}
                    </div>
                </div>

                {if let Some(date) = props.selected {
                    html! { <p class="selected-date">{format_date_for_display(date)}</p> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
