use super::*;

fn coords(lat: f64, lng: f64) -> Option<Coordinates> {
    Coordinates::new(lat, lng)
}

// -----------------------------------------------------------------------
// Replies without entries
// -----------------------------------------------------------------------

#[test]
fn empty_reply_yields_nothing() {
    assert!(extract("").is_empty());
}

#[test]
fn refusal_without_numbered_entries_yields_nothing() {
    assert!(extract("Sorry, I can't help.").is_empty());
}

#[test]
fn entries_without_fields_are_dropped() {
    let reply = "Here you go:\n1. Joe's Cafe\n2. Brew House\n";
    assert!(extract(reply).is_empty());
}

// -----------------------------------------------------------------------
// Well-formed replies
// -----------------------------------------------------------------------

#[test]
fn single_entry_is_parsed_field_for_field() {
    let reply =
        "1. Joe's Cafe\nType: Cafe\nLocation: 5 Main St\nRating: 4.5/5\nCoordinates: 12.97, 77.59";
    let records = extract(reply);
    assert_eq!(records.len(), 1);
    let r = &records[0];
    assert_eq!(r.name, "Joe's Cafe");
    assert_eq!(r.business_type, "Cafe");
    assert_eq!(r.location, "5 Main St");
    assert_eq!(r.rating, "4.5/5");
    assert_eq!(r.coordinates, coords(12.97, 77.59));
}

#[test]
fn preamble_and_multiple_entries() {
    let reply = "\
Here are some coffee shops in Bangalore:

1. Third Wave Coffee
Type: Coffee Shop
Location: 80 Feet Rd, Koramangala, Bengaluru
Rating: 4.4/5
Coordinates: 12.9352, 77.6245

2. Blue Tokai Coffee Roasters
Type: Cafe
Location: 1st Cross Rd, Indiranagar, Bengaluru
Rating: 4.6/5
Coordinates: 12.9719, 77.6412

3. Dyu Art Cafe
Type: Art Cafe
Location: 23 MIG, KHB Colony, Koramangala
Rating: 4.3/5
Coordinates: 12.9340, 77.6190
";
    let records = extract(reply);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].name, "Third Wave Coffee");
    assert_eq!(records[1].name, "Blue Tokai Coffee Roasters");
    assert_eq!(records[1].rating, "4.6/5");
    assert_eq!(records[2].business_type, "Art Cafe");
    assert_eq!(records[2].coordinates, coords(12.934, 77.619));
}

#[test]
fn crlf_and_indented_lines_are_trimmed() {
    let reply = "1. Corner Bakery\r\n   Type: Bakery \r\n   Location:  9 High St \r\n";
    let records = extract(reply);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Corner Bakery");
    assert_eq!(records[0].business_type, "Bakery");
    assert_eq!(records[0].location, "9 High St");
}

#[test]
fn value_is_taken_after_first_colon() {
    let reply = "1. Clock Tower Diner\n- Location: Unit 4: Market Sq\n";
    let records = extract(reply);
    assert_eq!(records[0].location, "Unit 4: Market Sq");
}

#[test]
fn line_with_two_labels_belongs_to_the_first_listed() {
    let reply = "1. Odd Place\nLocation: Type: 5 Main St\n";
    let records = extract(reply);
    assert_eq!(records.len(), 0, "line was claimed by Type, so no location");

    let reply = "1. Odd Place\nLocation: Type: 5 Main St\nCoordinates: 1.0, 2.0\n";
    let records = extract(reply);
    assert_eq!(records[0].business_type, "Type: 5 Main St");
    assert!(records[0].location.is_empty());
}

// -----------------------------------------------------------------------
// Coordinates
// -----------------------------------------------------------------------

#[test]
fn malformed_coordinates_keep_record_without_coordinates() {
    let reply = "1. Joe's Cafe\nLocation: 5 Main St\nCoordinates: [latitude], [longitude]\n";
    let records = extract(reply);
    assert_eq!(records.len(), 1);
    assert!(records[0].coordinates.is_none());
}

#[test]
fn coordinates_with_wrong_token_count_are_ignored() {
    let reply = "1. Joe's Cafe\nLocation: 5 Main St\nCoordinates: 12.97\n\
                 2. Brew House\nLocation: 6 Main St\nCoordinates: 1, 2, 3\n";
    let records = extract(reply);
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.coordinates.is_none()));
}

#[test]
fn coordinates_alone_are_enough_to_keep_a_record() {
    let reply = "1. Pop-up Stall\nCoordinates: -33.8688, 151.2093\n";
    let records = extract(reply);
    assert_eq!(records.len(), 1);
    assert!(records[0].location.is_empty());
    assert_eq!(records[0].coordinates, coords(-33.8688, 151.2093));
}

#[test]
fn out_of_range_coordinates_still_keep_the_record() {
    let records = extract("1. Far Place\nCoordinates: 95.0, 10.0\n");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Far Place");
    assert_eq!(
        records[0].coordinates,
        Some(Coordinates {
            latitude: 95.0,
            longitude: 10.0,
        })
    );
}

#[test]
fn bad_coordinates_line_does_not_clear_an_earlier_good_one() {
    let reply = "1. Joe's Cafe\nCoordinates: 12.97, 77.59\nCoordinates: unknown\n";
    let records = extract(reply);
    assert_eq!(records[0].coordinates, coords(12.97, 77.59));
}

// -----------------------------------------------------------------------
// Retention
// -----------------------------------------------------------------------

#[test]
fn entry_without_location_or_coordinates_is_dropped() {
    let reply = "1. Ghost Cafe\nType: Cafe\nRating: 4.0/5\n2. Real Cafe\nLocation: 1 Real Rd\n";
    let records = extract(reply);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Real Cafe");
}

#[test]
fn blank_entry_gets_sentinel_name_and_is_dropped() {
    let reply = "1. \n\n2. Real Cafe\nLocation: 1 Real Rd\n";
    let records = extract(reply);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Real Cafe");
}

#[test]
fn entry_literally_named_unknown_is_dropped() {
    let reply = "1. Unknown\nLocation: 5 Main St\nCoordinates: 1.0, 2.0\n";
    assert!(extract(reply).is_empty());
}

// -----------------------------------------------------------------------
// Duplicate labels
// -----------------------------------------------------------------------

#[test]
fn last_wins_by_default() {
    let reply = "1. Joe's Cafe\nLocation: Old Address\nLocation: New Address\n\
                 Coordinates: 1.0, 2.0\nCoordinates: 3.0, 4.0\n";
    let records = extract(reply);
    assert_eq!(records[0].location, "New Address");
    assert_eq!(records[0].coordinates, coords(3.0, 4.0));
}

#[test]
fn last_wins_overwrites_with_empty_value() {
    let reply = "1. Joe's Cafe\nType: Cafe\nType:\nLocation: 5 Main St\n";
    let records = extract(reply);
    assert!(records[0].business_type.is_empty());
}

#[test]
fn first_wins_keeps_first_non_empty_value() {
    let extractor = RecordExtractor::new(FieldPrecedence::FirstWins);
    let reply = "1. Joe's Cafe\nType:\nType: Cafe\nType: Bar\nLocation: Old Address\n\
                 Location: New Address\nCoordinates: 1.0, 2.0\nCoordinates: 3.0, 4.0\n";
    let records = extractor.extract(reply);
    assert_eq!(records[0].business_type, "Cafe");
    assert_eq!(records[0].location, "Old Address");
    assert_eq!(records[0].coordinates, coords(1.0, 2.0));
}

// -----------------------------------------------------------------------
// Delimiter quirks
// -----------------------------------------------------------------------

#[test]
fn decimal_ratings_do_not_split_entries() {
    let reply = "1. Joe's Cafe\nLocation: 5 Main St\nRating: 4.5/5\n";
    let records = extract(reply);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].rating, "4.5/5");
}

#[test]
fn delimiter_inside_a_line_starts_a_new_entry() {
    // "No. " is not a delimiter (no digit), but "5. " is. The tail becomes a
    // nameless-field entry and is dropped.
    let reply = "1. Joe's Cafe\nLocation: Shop No. 5. Main St\n";
    let records = extract(reply);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Joe's Cafe");
    assert_eq!(records[0].location, "Shop No.");
}
