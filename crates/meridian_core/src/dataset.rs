//! Built-in fallback dataset.
//!
//! Used only when the embedding page supplies no testimonials of its own;
//! caller-supplied records are always honoured verbatim.

use crate::geo::GeoPoint;
use crate::testimonial::Testimonial;

/// The stock dataset the demo ships with.
///
/// Two records intentionally share the Chicago coordinate so multi-quote
/// pins are exercised out of the box.
pub fn builtin() -> Vec<Testimonial> {
    fn t(name: &str, affiliation: &str, place: &str, quote: &str, lat: f32, lon: f32) -> Testimonial {
        Testimonial {
            display_name: name.into(),
            affiliation: affiliation.into(),
            location_label: place.into(),
            body_text: quote.into(),
            coordinate: GeoPoint::new(lat, lon),
        }
    }

    vec![
        t(
            "Maren Voss",
            "Harbor & Pine Studio",
            "Chicago",
            "The rebrand gave us a visual language our whole team actually uses. \
             Six months in, it still feels like ours.",
            41.8781,
            -87.6298,
        ),
        t(
            "Devon Okafor",
            "Lakeshore Analytics",
            "Chicago",
            "Clear process, honest feedback, and a launch that landed on time. \
             We've already come back for a second project.",
            41.8781,
            -87.6298,
        ),
        t(
            "Priya Raman",
            "Cedar Grove Collective",
            "New York",
            "They translated a messy brief into an identity our customers \
             recognise at a glance.",
            40.7128,
            -74.0060,
        ),
        t(
            "Tomás Rivera",
            "Austral Works",
            "Santiago, Chile",
            "Working across time zones was painless. Every review arrived with \
             options, trade-offs, and a recommendation.",
            -33.4489,
            -70.6693,
        ),
        t(
            "Imogen Hartley",
            "Fieldnote Films",
            "London, UK",
            "The strategy deck alone was worth the engagement. The design work \
             on top of it made the decision easy.",
            51.5074,
            -0.1278,
        ),
        t(
            "Sipho Dlamini",
            "Meridian Trade Co.",
            "Cape Town, South Africa",
            "From first sketch to shipped site in eight weeks, with zero \
             surprises on scope or cost.",
            -33.9249,
            18.4241,
        ),
        t(
            "Hana Sato",
            "Kite & Anchor",
            "Tokyo, Japan",
            "Thoughtful, fast, and genuinely collaborative. Our conversion rate \
             is up and the brand finally matches the product.",
            35.6762,
            139.6503,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::builtin;
    use crate::testimonial::validate;

    #[test]
    fn builtin_dataset_is_valid() {
        let data = builtin();
        assert!(validate(&data).is_ok());
    }

    #[test]
    fn builtin_contains_a_shared_coordinate() {
        let data = builtin();
        let shared = data
            .iter()
            .filter(|t| data.iter().any(|o| !std::ptr::eq(*t, o) && o.coordinate.approx_same(t.coordinate)))
            .count();
        assert!(shared >= 2);
    }
}
