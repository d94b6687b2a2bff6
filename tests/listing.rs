use msf_inventory::model::ItemType;
use msf_inventory::parsers::parse_listing;

const EXPLOIT_LISTING: &str = include_str!("fixtures/search_exploit.txt");
const POST_LISTING: &str = include_str!("fixtures/search_post.txt");

#[test]
fn strips_type_prefix_and_drops_foreign_rows() {
    let output = "Matching Modules\n================\n\n   exploit/windows/smb/ms17_010  2017-03-14  excellent  EternalBlue\n   auxiliary/unrelated/foo        normal     Misc\n";

    let parsed = parse_listing(output, ItemType::Exploit);

    assert_eq!(parsed.identifiers, vec!["windows/smb/ms17_010".to_string()]);
    assert_eq!(parsed.rejected_rows, 1);
}

#[test]
fn indexed_table_uses_name_column() {
    let parsed = parse_listing(EXPLOIT_LISTING, ItemType::Exploit);

    assert_eq!(
        parsed.identifiers,
        vec![
            "windows/smb/ms17_010_eternalblue",
            "linux/http/apache_continuum_cmd_exec",
            "multi/misc/java_rmi_server",
            "aix/local/xorg_x11_server",
            "solaris/sunrpc/sadmind_exec",
        ]
    );
    assert_eq!(parsed.skipped_lines, 4);
    // The trailing "Interact with a module..." hint.
    assert_eq!(parsed.rejected_rows, 1);
}

#[test]
fn plain_table_with_status_banner() {
    let parsed = parse_listing(POST_LISTING, ItemType::Post);

    assert_eq!(
        parsed.identifiers,
        vec![
            "windows/gather/hashdump",
            "linux/gather/enum_system",
            "multi/recon/local_exploit_suggester",
        ]
    );
}

#[test]
fn every_identifier_contains_a_slash() {
    let output = "\
prose line without path
   windows/x86/shikata_ga_nai  excellent
   single_token
   x64/xor  normal
";
    let parsed = parse_listing(output, ItemType::Encoder);

    assert_eq!(parsed.identifiers, vec!["windows/x86/shikata_ga_nai", "x64/xor"]);
    assert!(parsed.identifiers.iter().all(|id| id.contains('/')));
    assert_eq!(parsed.rejected_rows, 2);
}

#[test]
fn duplicates_are_kept_in_place() {
    let row = "   nop/x86/single_byte  normal  Single Byte\n";
    let output = format!("{row}   nop/x64/simple  normal  Simple\n{row}{row}");

    let parsed = parse_listing(&output, ItemType::Nop);

    assert_eq!(
        parsed.identifiers,
        vec!["x86/single_byte", "x64/simple", "x86/single_byte", "x86/single_byte"]
    );
}

#[test]
fn header_detection_is_substring_based() {
    let output = "\
  ==== banner ====
[+] loaded
  some Name header variant
  -------   --------
  payload/windows/meterpreter/reverse_tcp  normal
";
    let parsed = parse_listing(output, ItemType::Payload);

    assert_eq!(parsed.identifiers, vec!["windows/meterpreter/reverse_tcp"]);
    assert_eq!(parsed.skipped_lines, 4);
}

#[test]
fn empty_output_yields_nothing() {
    let parsed = parse_listing("", ItemType::Auxiliary);

    assert!(parsed.is_empty());
    assert_eq!(parsed.skipped_lines, 0);
    assert_eq!(parsed.rejected_rows, 0);
}
