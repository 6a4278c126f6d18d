#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use std::collections::HashMap;
    use std::rc::Rc;
    use yacht_booking::models::{
        catalog::Catalog,
        error::AppError,
        exchange::{Currency, ExchangeSnapshot, ExchangeState},
        reservation::{DateRange, DraftAction, RentalMode, ReservationDraft, ReservationError},
        yacht::Yacht,
    };
    use yacht_booking::services::storage::{KeyValueStore, MemoryStore, Preferences};

    // Helper function to create a test yacht
    fn create_test_yacht(price: u32, capacity: u32) -> Yacht {
        serde_json::from_value(serde_json::json!({
            "id": "test-yacht",
            "title": "Test Yacht",
            "description": "A yacht for tests",
            "location": "Antalya",
            "price": price,
            "capacity": capacity,
            "image": "/img/test.jpg"
        }))
        .unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn daily(start: Option<NaiveDate>, end: Option<NaiveDate>) -> ReservationDraft {
        ReservationDraft {
            mode: RentalMode::Daily,
            dates: DateRange { start, end },
            ..ReservationDraft::default()
        }
    }

    fn hourly(hours: u32) -> ReservationDraft {
        ReservationDraft {
            mode: RentalMode::Hourly,
            hours,
            ..ReservationDraft::default()
        }
    }

    // Helper function to create a snapshot shaped like the endpoint's response
    fn create_test_snapshot() -> ExchangeSnapshot {
        serde_json::from_str(
            r#"{
                "rates": { "USD": 1.08, "TRY": 35.2, "GBP": 0.85, "RUB": 98.5 },
                "history": { "USD": [1.07, 1.075, 1.08], "TRY": [34.9, 35.0, 35.2] },
                "date": "2025-03-04",
                "tcmb": { "USD": 32.61, "GBP": null, "RUB": 0 },
                "tcmb_date": "04.03.2025"
            }"#,
        )
        .unwrap()
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_reservation_error_messages() {
        assert_eq!(
            ReservationError::CapacityExceeded { max: 12 }.to_string(),
            "Maximum capacity is 12 guests"
        );
        assert_eq!(
            ReservationError::MissingDateRange.to_string(),
            "Please select your dates"
        );
        assert_eq!(
            ReservationError::MissingDuration.to_string(),
            "Please select a duration"
        );
    }

    // ===== Duration & Price Tests =====

    #[test]
    fn test_daily_same_day_is_one_day() {
        let day = date(2025, 7, 14);
        assert_eq!(daily(Some(day), Some(day)).duration(), 1);
    }

    #[test]
    fn test_daily_range_is_inclusive() {
        let draft = daily(Some(date(2025, 1, 1)), Some(date(2025, 1, 3)));
        assert_eq!(draft.duration(), 3);
    }

    #[test]
    fn test_daily_start_only_is_one_day() {
        assert_eq!(daily(Some(date(2025, 1, 1)), None).duration(), 1);
    }

    #[test]
    fn test_daily_range_across_month_end() {
        let draft = daily(Some(date(2025, 2, 27)), Some(date(2025, 3, 2)));
        assert_eq!(draft.duration(), 4);
    }

    #[test]
    fn test_daily_without_start() {
        let yacht = create_test_yacht(150, 8);
        let draft = daily(None, None);

        assert_eq!(draft.duration(), 0);
        assert_eq!(draft.total_price(&yacht), 0);
        assert_eq!(draft.validate(&yacht), Err(ReservationError::MissingDateRange));
    }

    #[test]
    fn test_hourly_total() {
        let yacht = create_test_yacht(100, 8);
        assert_eq!(hourly(3).total_price(&yacht), 300);
    }

    #[test]
    fn test_daily_total() {
        let yacht = create_test_yacht(150, 8);
        let draft = daily(Some(date(2025, 6, 1)), Some(date(2025, 6, 2)));
        assert_eq!(draft.duration(), 2);
        assert_eq!(draft.total_price(&yacht), 300);
    }

    #[test]
    fn test_switching_mode_uses_only_current_duration() {
        let yacht = create_test_yacht(100, 8);
        let draft = ReservationDraft::default()
            .apply(DraftAction::SetStart(Some(date(2025, 1, 1))))
            .apply(DraftAction::SetEnd(Some(date(2025, 1, 5))))
            .apply(DraftAction::SetHours(3));

        assert_eq!(draft.total_price(&yacht), 500);

        let draft = draft.apply(DraftAction::SetMode(RentalMode::Hourly));
        assert_eq!(draft.duration(), 3);
        assert_eq!(draft.total_price(&yacht), 300);

        let draft = draft.apply(DraftAction::SetMode(RentalMode::Daily));
        assert_eq!(draft.duration(), 5);
        assert_eq!(draft.total_price(&yacht), 500);
    }

    #[test]
    fn test_hourly_mode_ignores_missing_dates() {
        let yacht = create_test_yacht(100, 8);
        let draft = ReservationDraft::default()
            .apply(DraftAction::SetMode(RentalMode::Hourly))
            .apply(DraftAction::SetHours(4));

        assert_eq!(draft.dates.start, None);
        assert_eq!(draft.total_price(&yacht), 400);
        assert!(draft.validate(&yacht).is_ok());
    }

    // ===== Validation Tests =====

    #[test]
    fn test_capacity_exceeded_iff_guests_above_capacity() {
        let start = Some(date(2025, 5, 1));
        for capacity in 1..=12 {
            let yacht = create_test_yacht(100, capacity);
            for guests in 1..=15 {
                let draft = daily(start, None).apply(DraftAction::SetGuests(guests));
                let exceeded = matches!(
                    draft.validate(&yacht),
                    Err(ReservationError::CapacityExceeded { .. })
                );
                assert_eq!(exceeded, guests > capacity, "guests={guests} capacity={capacity}");
            }
        }
    }

    #[test]
    fn test_capacity_checked_before_dates() {
        let yacht = create_test_yacht(100, 2);
        let draft = daily(None, None).apply(DraftAction::SetGuests(5));
        assert_eq!(
            draft.validate(&yacht),
            Err(ReservationError::CapacityExceeded { max: 2 })
        );
    }

    #[test]
    fn test_hourly_zero_hours_is_missing_duration() {
        let yacht = create_test_yacht(100, 8);
        assert_eq!(
            hourly(0).validate(&yacht),
            Err(ReservationError::MissingDuration)
        );
    }

    #[test]
    fn test_daily_summary() {
        let yacht = create_test_yacht(150, 8);
        let draft = daily(Some(date(2025, 1, 1)), Some(date(2025, 1, 3)));

        let summary = draft.validate(&yacht).unwrap();
        assert_eq!(summary.to_string(), "Test Yacht • 3 days • 4 guests");
    }

    #[test]
    fn test_hourly_summary_includes_start_time() {
        let yacht = create_test_yacht(100, 8);
        let draft = hourly(2)
            .apply(DraftAction::SetStartTime(NaiveTime::from_hms_opt(14, 0, 0).unwrap()))
            .apply(DraftAction::SetGuests(1));

        let summary = draft.validate(&yacht).unwrap();
        assert_eq!(summary.to_string(), "Test Yacht • 2 hours (14:00) • 1 guest");
    }

    #[test]
    fn test_submission_leaves_draft_untouched() {
        let yacht = create_test_yacht(100, 8);
        let draft = hourly(2);
        let before = draft.clone();

        assert!(draft.validate(&yacht).is_ok());
        assert_eq!(draft, before);
    }

    // ===== Catalog Tests =====

    #[test]
    fn test_catalog_entries_are_bookable() {
        let catalog = Catalog::load().unwrap();
        for yacht in catalog.yachts() {
            assert!(yacht.price > 0, "{} has no price", yacht.id);
            assert!(yacht.capacity > 0, "{} has no capacity", yacht.id);
        }
    }

    #[test]
    fn test_catalog_spec_rows_order() {
        let catalog = Catalog::load().unwrap();
        let yacht = catalog.find("sea-breeze").unwrap();
        let labels: Vec<&str> = yacht.spec_rows().iter().map(|(label, _)| *label).collect();

        assert_eq!(
            labels,
            vec![
                "Length",
                "Width",
                "Cabins",
                "WC",
                "Crew",
                "Speed",
                "Build year",
                "Capacity",
                "Marina",
                "Region"
            ]
        );
        assert_eq!(yacht.place(), "Kaleiçi Yacht Harbour");
    }

    // ===== Exchange Snapshot Tests =====

    #[test]
    fn test_snapshot_tolerates_missing_fields() {
        let snapshot: ExchangeSnapshot = serde_json::from_str(r#"{ "rates": { "USD": 1.1 } }"#).unwrap();
        assert!(snapshot.history.is_empty());
        assert_eq!(snapshot.tcmb, None);
        assert_eq!(snapshot.last_updated_display(), None);
    }

    #[test]
    fn test_snapshot_tolerates_null_maps() {
        let snapshot: ExchangeSnapshot = serde_json::from_str(
            r#"{ "rates": null, "history": null, "date": "2025-03-04", "tcmb": null, "tcmb_date": null }"#,
        )
        .unwrap();
        assert!(snapshot.rates.is_empty());
        assert!(snapshot.history.is_empty());
        assert!(snapshot.panel_rows().is_empty());
        assert_eq!(snapshot.last_updated_display().as_deref(), Some("04.03.2025"));

        let snapshot: ExchangeSnapshot =
            serde_json::from_str(r#"{ "rates": { "USD": 1.1 }, "history": null }"#).unwrap();
        assert_eq!(snapshot.rate_for(Currency::Usd), Some(1.1));
        assert_eq!(snapshot.panel_rows()[0].history, Vec::<f64>::new());
    }

    #[test]
    fn test_rate_for_eur_is_one() {
        let snapshot = create_test_snapshot();
        assert_eq!(snapshot.rate_for(Currency::Eur), Some(1.0));
        assert_eq!(snapshot.rate_for(Currency::Usd), Some(1.08));
    }

    #[test]
    fn test_selling_rate_prefers_official() {
        let snapshot = create_test_snapshot();
        assert_eq!(snapshot.selling_rate_in_try(Currency::Usd), 32.61);
        assert_eq!(snapshot.selling_rate_in_try(Currency::Try), 1.0);
    }

    #[test]
    fn test_selling_rate_falls_back_to_cross_rate() {
        let snapshot = create_test_snapshot();

        // null official rate
        let gbp = snapshot.selling_rate_in_try(Currency::Gbp);
        assert!((gbp - 35.2 / 0.85).abs() < 1e-9);

        // zero official rate
        let rub = snapshot.selling_rate_in_try(Currency::Rub);
        assert!((rub - 35.2 / 98.5).abs() < 1e-9);
    }

    #[test]
    fn test_cross_rate_treats_missing_rates_as_one() {
        let snapshot = ExchangeSnapshot {
            rates: HashMap::from([("USD".to_string(), 2.0)]),
            ..ExchangeSnapshot::default()
        };
        assert_eq!(snapshot.selling_rate_in_try(Currency::Usd), 0.5);
    }

    #[test]
    fn test_panel_rows() {
        let snapshot = create_test_snapshot();
        let rows = snapshot.panel_rows();

        let codes: Vec<&str> = rows.iter().map(|r| r.currency.code()).collect();
        assert_eq!(codes, vec!["USD", "TRY", "GBP", "RUB"]);
        assert_eq!(rows[0].history, vec![1.07, 1.075, 1.08]);
        assert!(rows[2].history.is_empty());
        assert_eq!(snapshot.tcmb_date_display().as_deref(), Some("04.03.2025"));
        assert_eq!(snapshot.last_updated_display().as_deref(), Some("04.03.2025"));
    }

    // ===== ExchangeState Tests =====

    #[test]
    fn test_failed_fetch_keeps_last_snapshot() {
        let loaded = ExchangeState::Loading.with_fetch_result(Ok(create_test_snapshot()));
        let previous = loaded.data().cloned().unwrap();

        let after_failure =
            loaded.with_fetch_result(Err(AppError::ApiError("offline".to_string())));
        assert_eq!(after_failure.data(), Some(&previous));
    }

    #[test]
    fn test_failed_refresh_leaves_state_equal() {
        let loaded = ExchangeState::Loading.with_fetch_result(Ok(create_test_snapshot()));
        let after_failure = loaded
            .clone()
            .with_fetch_result(Err(AppError::ApiError("timeout".to_string())));
        assert_eq!(after_failure, loaded);
    }

    #[test]
    fn test_failed_first_fetch_stays_loading() {
        let state = ExchangeState::Loading
            .with_fetch_result(Err(AppError::NotFound("gone".to_string())));
        assert!(state.is_loading());
    }

    #[test]
    fn test_successful_fetch_replaces_snapshot() {
        let first = ExchangeState::Loading.with_fetch_result(Ok(create_test_snapshot()));
        let replacement: ExchangeSnapshot =
            serde_json::from_str(r#"{ "rates": { "USD": 1.2 } }"#).unwrap();

        let second = first.with_fetch_result(Ok(replacement.clone()));
        let data = second.data().unwrap();
        assert_eq!(data, &Rc::new(replacement));
        // Replaced wholesale, not merged
        assert!(!data.rates.contains_key("TRY"));
    }

    // ===== Preferences Tests =====

    #[test]
    fn test_preferences_defaults() {
        let prefs = Preferences::new(MemoryStore::default());
        assert_eq!(prefs.sidebar_collapsed(), None);
        assert_eq!(prefs.currency(), Currency::Eur);
    }

    #[test]
    fn test_preferences_round_trip() {
        let prefs = Preferences::new(MemoryStore::default());
        prefs.set_sidebar_collapsed(true);
        prefs.set_currency(Currency::Gbp);

        assert_eq!(prefs.sidebar_collapsed(), Some(true));
        assert_eq!(prefs.currency(), Currency::Gbp);
    }

    #[test]
    fn test_preferences_use_plain_string_values() {
        let store = MemoryStore::default();
        store.set("currency", "TRY");
        store.set("sidebar-collapsed", "false");

        let prefs = Preferences::new(store);
        assert_eq!(prefs.currency(), Currency::Try);
        assert_eq!(prefs.sidebar_collapsed(), Some(false));
    }
}
