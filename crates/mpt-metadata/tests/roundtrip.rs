//! Property tests for the canonical codec and the validator.

use mpt_metadata::{
    AdditionalInfo, AssetClass, AssetSubclass, MPTokenMetadata, MetadataUri, UriCategory,
    ValidationError, decode_metadata, encode_metadata, validate_metadata,
};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn arb_uri() -> impl Strategy<Value = MetadataUri> {
    (
        "https://[a-z]{1,12}\\.example/[a-z0-9]{0,8}",
        prop::sample::select(UriCategory::ALL.to_vec()),
        "[A-Za-z0-9 ]{1,16}",
    )
        .prop_map(|(uri, category, title)| MetadataUri::new(uri, category, title))
}

fn arb_additional_info() -> impl Strategy<Value = AdditionalInfo> {
    prop_oneof![
        "[a-zA-Z0-9 %.]{1,24}".prop_map(AdditionalInfo::Text),
        prop::collection::btree_map("[a-z_]{1,8}", "[a-z0-9]{0,8}", 0..4).prop_map(|m| {
            let map: Map<String, Value> = m.into_iter().map(|(k, v)| (k, Value::String(v))).collect();
            AdditionalInfo::Map(map)
        }),
    ]
}

fn arb_metadata() -> impl Strategy<Value = MPTokenMetadata> {
    let class_and_subclass = prop::sample::select(AssetClass::ALL.to_vec()).prop_flat_map(|class| {
        let subclass = prop::sample::select(AssetSubclass::ALL.to_vec());
        let subclass = if class == AssetClass::Rwa {
            subclass.prop_map(Some).boxed()
        } else {
            prop::option::of(subclass).boxed()
        };
        subclass.prop_map(move |sub| (class, sub))
    });

    (
        "[A-Z0-9]{1,6}",
        "[A-Za-z0-9 .-]{1,20}",
        prop::option::of("[A-Za-z0-9 .,-]{1,40}"),
        "https://[a-z]{1,12}\\.example/icon\\.png",
        class_and_subclass,
        "[A-Za-z0-9 .]{1,20}",
        prop::option::of(prop::collection::vec(arb_uri(), 1..4)),
        prop::option::of(arb_additional_info()),
    )
        .prop_map(
            |(ticker, name, desc, icon, (asset_class, asset_subclass), issuer_name, uris, additional_info)| {
                MPTokenMetadata {
                    ticker,
                    name,
                    desc,
                    icon,
                    asset_class,
                    asset_subclass,
                    issuer_name,
                    uris,
                    additional_info,
                }
            },
        )
}

proptest! {
    #[test]
    fn prop_roundtrip_is_idempotent(md in arb_metadata()) {
        let hex = encode_metadata(&md).unwrap();
        let decoded = decode_metadata(&hex).unwrap();

        prop_assert_eq!(&decoded, &md);
        prop_assert_eq!(encode_metadata(&decoded).unwrap(), hex);
    }

    #[test]
    fn prop_encoded_records_validate(md in arb_metadata()) {
        let hex = encode_metadata(&md).unwrap();
        prop_assert!(validate_metadata(&hex).is_empty());
    }

    #[test]
    fn prop_collision_reported_exactly_once(md in arb_metadata(), extra in "[A-Z]{1,6}") {
        let mut json = md.to_json();
        json["ticker"] = Value::String(extra);
        let hex = hex::encode(serde_json::to_vec(&json).unwrap());

        let collisions = validate_metadata(&hex)
            .into_iter()
            .filter(|e| *e == ValidationError::FieldCollision { long: "ticker", compact: "t" })
            .count();
        prop_assert_eq!(collisions, 1);
    }
}
