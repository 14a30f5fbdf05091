//! End-to-end parsing of Media Fragments URIs.

use std::io;
use std::sync::{Arc, Mutex};

use media_fragments::{
    Dimension, MediaFragment, ParseResult, Parser, ParserConfig, SpatialUnit, TimeUnit, parse,
};
use tracing_subscriber::fmt::MakeWriter;

fn hash(fragment: &str) -> ParseResult {
    parse(&format!("http://example.com/video.ogv#{fragment}"))
}

mod time_dimension {
    use super::*;

    #[test]
    fn bare_seconds_kept_verbatim() {
        let result = hash("t=10,20");
        let t = result.hash().times().next().unwrap();
        assert_eq!(t.unit(), TimeUnit::Npt);
        assert_eq!(t.start(), "10");
        assert_eq!(t.end(), "20");
    }

    #[test]
    fn minutes_canonicalized_to_seconds() {
        let result = hash("t=npt:10:00,npt:20:00");
        let t = result.hash().times().next().unwrap();
        assert_eq!((t.start(), t.end()), ("600", "1200"));
    }

    #[test]
    fn reversed_range_absent() {
        assert!(hash("t=10,5").hash().is_empty());
    }

    #[test]
    fn encoded_comma_is_decoded_before_validation() {
        let result = hash("t=10%2C20");
        assert_eq!(result.hash().times().next().unwrap().end(), "20");
    }

    #[test]
    fn extra_range_separator_absent() {
        assert!(hash("t=10,20,30").hash().is_empty());
    }

    #[test]
    fn clock_equal_endpoints_absent() {
        assert!(
            hash("t=clock:2009-07-26T11:19:01Z,2009-07-26T11:19:01Z")
                .hash()
                .is_empty()
        );
    }

    #[test]
    fn smpte_order_not_checked() {
        // Known limitation: SMPTE ranges are never checked for ordering.
        let result = hash("t=smpte-30:0:02:00,0:01:00");
        let t = result.hash().times().next().unwrap();
        assert_eq!(t.unit(), TimeUnit::Smpte30);
        assert_eq!((t.start(), t.end()), ("0:02:00", "0:01:00"));
    }

    #[test]
    fn clock_range() {
        let result = hash("t=clock:2011-10-01T12:00:00Z,2011-10-01T12:30:00Z");
        let t = result.hash().times().next().unwrap();
        assert_eq!(t.unit(), TimeUnit::Clock);
        assert_eq!(t.start(), "2011-10-01T12:00:00Z");
    }
}

mod spatial_dimension {
    use super::*;

    #[test]
    fn pixel_default_unit() {
        let result = hash("xywh=10,10,100,100");
        let area = result.hash().spatials().next().unwrap();
        assert_eq!(area.unit(), SpatialUnit::Pixel);
        assert_eq!(
            (area.x(), area.y(), area.w(), area.h()),
            ("10", "10", "100", "100")
        );
    }

    #[test]
    fn percent_selection() {
        let result = hash("xywh=percent:10,10,50,50");
        let area = result.hash().spatials().next().unwrap();
        assert_eq!(area.unit(), SpatialUnit::Percent);
        assert_eq!(
            (area.x(), area.y(), area.w(), area.h()),
            ("10", "10", "50", "50")
        );
    }

    #[test]
    fn percent_over_hundred_absent() {
        assert!(hash("xywh=percent:10,10,150,50").hash().is_empty());
    }
}

mod named_dimensions {
    use super::*;

    #[test]
    fn track_name() {
        let result = hash("track=audio");
        assert_eq!(result.hash().tracks().next().unwrap().name(), "audio");
    }

    #[test]
    fn repeated_tracks_in_order() {
        let result = hash("track=audio&track=video");
        let fragments = result.hash().get(Dimension::Track);
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].value(), "audio");
        assert_eq!(fragments[1].value(), "video");
    }

    #[test]
    fn chapter_name() {
        let result = hash("chapter=Chapter%201");
        assert_eq!(
            result.hash().chapters().next().unwrap().chapter(),
            "Chapter 1"
        );
    }
}

mod assembly {
    use super::*;

    #[test]
    fn malformed_pairs_do_not_affect_neighbours() {
        let result = hash("foo&t=&track=audio&t=10,20");
        let set = result.hash();
        assert_eq!(set.tracks().count(), 1);
        assert_eq!(set.times().count(), 1);
        assert_eq!(set.times().next().unwrap().start(), "10");
    }

    #[test]
    fn unknown_keys_ignored() {
        let result = hash("foo=10,20&bar=percent:1,2,3,4&x=&track=a");
        assert_eq!(result.hash().len(), 1);
        assert!(result.hash().get_by_name("foo").is_empty());
    }

    #[test]
    fn every_fragment_matches_its_key() {
        let result = hash("t=1,2&xywh=1,2,3,4&track=a&chapter=b&t=3,4");
        for (dimension, fragments) in result.hash().iter() {
            for fragment in fragments {
                assert_eq!(fragment.dimension(), dimension);
            }
        }
    }

    #[test]
    fn query_and_hash_are_independent() {
        let result = parse("http://x/y?track=audio#t=10,20");
        assert_eq!(
            result.query().dimensions().collect::<Vec<_>>(),
            vec![Dimension::Track]
        );
        assert_eq!(
            result.hash().dimensions().collect::<Vec<_>>(),
            vec![Dimension::Time]
        );
    }

    #[test]
    fn normalized_set_reparses_equivalently() {
        let result = hash("t=npt:1:00:00,npt:2:00:00&xywh=percent:0,0,100,100&track=a%26b");
        let reparsed = hash(&result.hash().to_string());

        let pairs = result.hash().iter().zip(reparsed.hash().iter());
        for ((d1, f1), (d2, f2)) in pairs {
            assert_eq!(d1, d2);
            assert_eq!(f1.len(), f2.len());
            for (a, b) in f1.iter().zip(f2) {
                let strip_value = |f: &MediaFragment| {
                    f.fields()
                        .into_iter()
                        .filter(|(name, _)| *name != "value")
                        .map(|(name, value)| (name, value.to_string()))
                        .collect::<Vec<_>>()
                };
                assert_eq!(strip_value(a), strip_value(b));
            }
        }
    }
}

mod location {
    use super::*;

    #[test]
    fn default_location_used_when_uri_absent() {
        let parser = Parser::new(
            ParserConfig::new().with_default_location("http://x/y?chapter=one#xywh=1,2,3,4"),
        );
        let result = parser.parse(None);
        assert_eq!(result.query().chapters().count(), 1);
        assert_eq!(result.hash().spatials().count(), 1);
    }

    #[test]
    fn explicit_uri_wins_over_default_location() {
        let parser = Parser::new(ParserConfig::new().with_default_location("http://x/y#track=a"));
        let result = parser.parse(Some("http://x/y#track=b"));
        assert_eq!(result.hash().tracks().next().unwrap().name(), "b");
    }
}

mod diagnostics {
    use super::*;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn captured(config: ParserConfig, uri: &str) -> String {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let _ = Parser::new(config).parse(Some(uri));
        });

        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn rejection_reported_when_verbose() {
        let output = captured(ParserConfig::new().with_verbose(true), "v#t=10,5");
        assert!(output.contains("Media Fragments URI parsing warning"), "{output}");
        assert!(output.contains("start must be less than end"), "{output}");
    }

    #[test]
    fn percent_rejection_names_field() {
        let output = captured(
            ParserConfig::new().with_verbose(true),
            "v#xywh=percent:10,10,150,50",
        );
        assert!(output.contains("out of range for field w"), "{output}");
    }

    #[test]
    fn rejection_silent_when_quiet() {
        let output = captured(ParserConfig::default(), "v#t=10,5&xywh=1,2");
        assert!(output.is_empty(), "{output}");
    }

    #[test]
    fn structural_discards_never_reported() {
        let output = captured(
            ParserConfig::new().with_verbose(true),
            "v?foo=bar&t=&novalue#=1&track=%ZZ",
        );
        assert!(output.is_empty(), "{output}");
    }
}

#[cfg(feature = "serde")]
mod json {
    use super::*;

    #[test]
    fn result_shape_mirrors_records() {
        let result = parse("v?track=audio#t=10,20&xywh=percent:1,2,3,4");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "query": {
                    "track": [{ "value": "audio", "name": "audio" }]
                },
                "hash": {
                    "t": [{ "value": "10,20", "unit": "npt", "start": "10", "end": "20" }],
                    "xywh": [{
                        "value": "percent:1,2,3,4",
                        "unit": "percent",
                        "x": "1", "y": "2", "w": "3", "h": "4"
                    }]
                }
            })
        );
    }
}
