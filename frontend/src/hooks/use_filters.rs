use yew::prelude::*;
use shared::{ColumnFilter, FilterPreferences, RowFilter};
use crate::services::preferences::FilterStore;

pub struct UseFiltersResult {
    pub state: FilterPreferences,
    pub actions: UseFiltersActions,
}

#[derive(Clone, PartialEq)]
pub struct UseFiltersActions {
    /// (filter, visible)
    pub set_row_visible: Callback<(RowFilter, bool)>,
    pub set_column_visible: Callback<(ColumnFilter, bool)>,
    pub reset: Callback<()>,
}

/// Filter preferences, loaded once and saved on every change.
#[hook]
pub fn use_filters(store: &FilterStore) -> UseFiltersResult {
    let prefs = {
        let store = store.clone();
        use_state(move || store.load())
    };

    let update = {
        let prefs = prefs.clone();
        let store = store.clone();
        move |change: &dyn Fn(&mut FilterPreferences)| {
            let mut next = *prefs;
            change(&mut next);
            store.save(&next);
            prefs.set(next);
        }
    };

    let set_row_visible = {
        let update = update.clone();
        Callback::from(move |(filter, visible): (RowFilter, bool)| {
            update(&|p: &mut FilterPreferences| p.set_row_visible(filter, visible));
        })
    };

    let set_column_visible = {
        let update = update.clone();
        Callback::from(move |(column, visible): (ColumnFilter, bool)| {
            update(&|p: &mut FilterPreferences| p.set_column_visible(column, visible));
        })
    };

    let reset = Callback::from(move |_| {
        update(&|p: &mut FilterPreferences| p.reset());
    });

    UseFiltersResult {
        state: *prefs,
        actions: UseFiltersActions { set_row_visible, set_column_visible, reset },
    }
}
