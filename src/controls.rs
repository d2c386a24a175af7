//! Form controls: rank window, data source, background settings, auth.

use crate::app::{self, SharedApp};
use crate::constants::*;
use crate::dom;
use crate::keymap::{opacity_to_percent, percent_to_opacity};
use crate::overlay;
use vinyl_core::{ItemKind, TimeRange, TopItemsQuery, Waveform};
use web_sys as web;

/// Query selected by the controls; anything unreadable keeps its default.
pub fn read_query(document: &web::Document) -> TopItemsQuery {
    let mut query = TopItemsQuery::default();
    if let Some(v) = dom::checked_radio_value(document, TIME_RANGE_GROUP) {
        match v.parse::<TimeRange>() {
            Ok(t) => query.time_range = t,
            Err(e) => log::warn!("[controls] {e}"),
        }
    }
    if let Some(v) = dom::checked_radio_value(document, DATA_TYPE_GROUP) {
        query.kind = if v == "artists" { ItemKind::Artist } else { ItemKind::Track };
    }
    if let Some(input) = dom::input_by_id(document, START_RANGE_ID) {
        if let Ok(rank) = input.value().trim().parse::<u32>() {
            query.start_rank = rank;
        }
    }
    query
}

pub fn set_eat_enabled(document: &web::Document, enabled: bool) {
    dom::set_disabled(document, EAT_BUTTON_ID, !enabled);
}

pub fn set_range_label(document: &web::Document, query: &TopItemsQuery) {
    dom::set_text(document, RANGE_LABEL_ID, &query.range_label());
}

pub fn reset_rank_controls(document: &web::Document) {
    if let Some(input) = dom::input_by_id(document, START_RANGE_ID) {
        input.set_min("1");
        input.set_max(&TopItemsQuery::MAX_START_RANK.to_string());
        input.set_step("1");
        input.set_value("1");
        input.set_disabled(false);
    }
    set_range_label(document, &TopItemsQuery::default());
}

pub fn sync_opacity_slider(document: &web::Document, opacity: f64) {
    let pct = opacity_to_percent(opacity);
    if let Some(input) = dom::input_by_id(document, WAVE_OPACITY_ID) {
        input.set_value(&pct.to_string());
    }
    dom::set_text(document, WAVE_OPACITY_VALUE_ID, &format!("{pct}%"));
}

pub fn sync_labels_checkbox(document: &web::Document, show: bool) {
    if let Some(input) = dom::input_by_id(document, SHOW_WAVE_LABELS_ID) {
        input.set_checked(show);
    }
}

pub fn sync_shape_radios(document: &web::Document, shape: Waveform) {
    for radio in dom::radio_group(document, WAVE_SHAPE_GROUP) {
        radio.set_checked(radio.value() == shape.name());
    }
}

pub fn wire_controls(app: &SharedApp, document: &web::Document) {
    let a = app.clone();
    dom::add_click_listener(document, APPLY_RANGE_ID, move || app::apply_current_range(&a));

    let a = app.clone();
    dom::add_click_listener(document, EAT_BUTTON_ID, move || a.borrow_mut().start_eating());

    dom::add_click_listener(document, LOGIN_BUTTON_ID, || dom::navigate(LOGIN_PATH));
    dom::add_click_listener(document, LOGOUT_BUTTON_ID, || dom::navigate(LOGOUT_PATH));

    let doc = document.clone();
    dom::add_input_listener(document, START_RANGE_ID, "input", move |input| {
        if let Ok(rank) = input.value().trim().parse::<u32>() {
            let query = TopItemsQuery {
                start_rank: rank,
                ..TopItemsQuery::default()
            };
            set_range_label(&doc, &query);
        }
    });

    let a = app.clone();
    dom::add_input_listener(document, WAVE_OPACITY_ID, "input", move |input| {
        if let Some(opacity) = percent_to_opacity(&input.value()) {
            let mut app = a.borrow_mut();
            app.wave.opacity = opacity;
            dom::set_text(
                &app.document,
                WAVE_OPACITY_VALUE_ID,
                &format!("{}%", opacity_to_percent(opacity)),
            );
            app.sync_wave_settings();
        }
    });

    let a = app.clone();
    dom::add_input_listener(document, SHOW_WAVE_LABELS_ID, "change", move |input| {
        let mut app = a.borrow_mut();
        app.wave.show_labels = input.checked();
        app.sync_wave_settings();
    });

    for radio in dom::radio_group(document, WAVE_SHAPE_GROUP) {
        let a = app.clone();
        dom::listen_input(&radio, "change", move |input| {
            if !input.checked() {
                return;
            }
            match input.value().parse::<Waveform>() {
                Ok(shape) => {
                    let mut app = a.borrow_mut();
                    app.wave.shape = shape;
                    app.sync_wave_settings();
                }
                Err(e) => log::warn!("[controls] {e}"),
            }
        });
    }

    let app = app.borrow();
    sync_opacity_slider(document, app.wave.opacity);
    sync_labels_checkbox(document, app.wave.show_labels);
    sync_shape_radios(document, app.wave.shape);
    reset_rank_controls(document);
    set_eat_enabled(document, false);
    overlay::status(
        document,
        "Rank range ready. Choose a window and click \"Update filter\".",
    );
}
