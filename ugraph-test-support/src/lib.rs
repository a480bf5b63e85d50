//! Shared test utilities used across ugraph crates.

pub mod tracing {
    //! Recording layer for asserting the diagnostics graph algorithms emit.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::registry::LookupSpan;
    use tracing_subscriber::{Layer, Registry};

    /// Field name to rendered value.
    pub type FieldMap = HashMap<String, String>;

    /// Layer that keeps every opened span and emitted event for later
    /// inspection.
    ///
    /// Clones share storage, so a test can hand one clone to a subscriber and
    /// query the other.
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        records: Arc<Mutex<Records>>,
    }

    #[derive(Default)]
    struct Records {
        spans: Vec<SpanRecord>,
        events: Vec<EventRecord>,
    }

    impl RecordingLayer {
        /// Returns the spans opened so far, in creation order.
        ///
        /// # Examples
        /// ```
        /// use ugraph_test_support::tracing::RecordingLayer;
        ///
        /// assert!(RecordingLayer::default().spans().is_empty());
        /// ```
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            self.lock().spans.clone()
        }

        /// Returns the events emitted so far, in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.lock().events.clone()
        }

        /// Returns the events emitted at `level`.
        #[must_use]
        pub fn events_at(&self, level: Level) -> Vec<EventRecord> {
            self.lock()
                .events
                .iter()
                .filter(|event| event.level == level)
                .cloned()
                .collect()
        }

        /// Returns `true` when a span named `name` was opened.
        #[must_use]
        pub fn saw_span(&self, name: &str) -> bool {
            self.lock().spans.iter().any(|span| span.name == name)
        }

        fn lock(&self) -> MutexGuard<'_, Records> {
            self.records.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    /// Runs `body` with a recording subscriber installed on the current
    /// thread and returns its result alongside the layer.
    ///
    /// # Examples
    /// ```
    /// use ugraph_test_support::tracing::capture;
    ///
    /// let (value, layer) = capture(|| {
    ///     tracing::warn!(vertex = 3, "short");
    ///     7
    /// });
    /// assert_eq!(value, 7);
    /// assert_eq!(layer.events()[0].field("vertex"), Some("3"));
    /// ```
    pub fn capture<T>(body: impl FnOnce() -> T) -> (T, RecordingLayer) {
        let layer = RecordingLayer::default();
        let subscriber = Registry::default().with(layer.clone());
        let value = tracing::subscriber::with_default(subscriber, body);
        (value, layer)
    }

    /// A span observed when it was opened.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct SpanRecord {
        /// Span name from the callsite metadata.
        pub name: String,
        /// Fields recorded at creation and through later `record` calls.
        pub fields: FieldMap,
    }

    /// An emitted event.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct EventRecord {
        /// Event verbosity.
        pub level: Level,
        /// Event target, normally the emitting module path.
        pub target: String,
        /// Structured fields, including `message`.
        pub fields: FieldMap,
    }

    impl EventRecord {
        /// Returns the rendered value of `name`, if the event carried it.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }

        /// Returns the event message, if any.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.field("message")
        }
    }

    /// Index of a span within [`Records::spans`], stored in span extensions.
    struct SpanSlot(usize);

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let mut fields = FieldMap::new();
            attrs.record(&mut FieldRecorder(&mut fields));
            let slot = {
                let mut records = self.lock();
                records.spans.push(SpanRecord {
                    name: attrs.metadata().name().to_owned(),
                    fields,
                });
                records.spans.len() - 1
            };
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(SpanSlot(slot));
            }
        }

        fn on_record(&self, id: &Id, values: &tracing::span::Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let Some(slot) = span.extensions().get::<SpanSlot>().map(|slot| slot.0) else {
                return;
            };
            if let Some(record) = self.lock().spans.get_mut(slot) {
                values.record(&mut FieldRecorder(&mut record.fields));
            }
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = FieldMap::new();
            event.record(&mut FieldRecorder(&mut fields));
            self.lock().events.push(EventRecord {
                level: *event.metadata().level(),
                target: event.metadata().target().to_owned(),
                fields,
            });
        }
    }

    struct FieldRecorder<'a>(&'a mut FieldMap);

    impl FieldRecorder<'_> {
        fn put(&mut self, field: &Field, value: String) {
            self.0.insert(field.name().to_owned(), value);
        }
    }

    impl Visit for FieldRecorder<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.put(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.put(field, value.to_owned());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.put(field, value.to_string());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.put(field, value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.put(field, value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.put(field, value.to_string());
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.put(field, value.to_string());
        }
    }

}

pub mod ci;
