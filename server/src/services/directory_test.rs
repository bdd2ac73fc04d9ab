use super::*;

// sha256("password")
const PASSWORD_DIGEST: &str = "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";

fn sample_yaml() -> String {
    format!(
        r#"
announcements:
  - id: a1
    title: Older
    body: first
    posted_at: "2026-01-05"
  - id: a2
    title: Newer
    body: second
    posted_at: "2026-03-01"
students:
  - id: "1"
    name: Ada Lovelace
    email: Ada@Example.edu
    password_sha256: {PASSWORD_DIGEST}
    program: Mathematics
    courses:
      - id: c1
        code: MATH201
        title: Linear Algebra
        instructor: Noether
        credits: 4
        progress: 65
  - id: "2"
    name: Alan Turing
    email: alan@example.edu
    password_sha256: {PASSWORD_DIGEST}
"#
    )
}

// =============================================================================
// hash_password
// =============================================================================

#[test]
fn hash_password_matches_known_vector() {
    assert_eq!(hash_password("password"), PASSWORD_DIGEST);
}

#[test]
fn bytes_to_hex_pads_each_byte() {
    assert_eq!(bytes_to_hex(&[0x00, 0x0f, 0xff]), "000fff");
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn from_yaml_str_loads_students() {
    let dir = Directory::from_yaml_str(&sample_yaml()).unwrap();
    assert_eq!(dir.len(), 2);
    assert!(!dir.is_empty());
    let ada = dir.get("1").unwrap();
    assert_eq!(ada.courses.len(), 1);
    assert!(dir.get("2").unwrap().courses.is_empty());
}

#[test]
fn from_yaml_str_empty_document_sections_default() {
    let dir = Directory::from_yaml_str("students: []").unwrap();
    assert!(dir.is_empty());
}

#[test]
fn from_yaml_str_rejects_duplicate_email_case_insensitively() {
    let yaml = format!(
        "students:\n  - {{id: '1', name: A, email: a@x.edu, password_sha256: {PASSWORD_DIGEST}}}\n  - {{id: '2', name: B, email: A@X.EDU, password_sha256: {PASSWORD_DIGEST}}}\n"
    );
    let err = Directory::from_yaml_str(&yaml).unwrap_err();
    assert!(matches!(err, DirectoryError::DuplicateEmail(ref e) if e == "A@X.EDU"));
}

#[test]
fn from_yaml_str_rejects_duplicate_id() {
    let yaml = format!(
        "students:\n  - {{id: '1', name: A, email: a@x.edu, password_sha256: {PASSWORD_DIGEST}}}\n  - {{id: '1', name: B, email: b@x.edu, password_sha256: {PASSWORD_DIGEST}}}\n"
    );
    let err = Directory::from_yaml_str(&yaml).unwrap_err();
    assert!(matches!(err, DirectoryError::DuplicateId(ref id) if id == "1"));
}

#[test]
fn from_yaml_str_rejects_plaintext_password() {
    let yaml = "students:\n  - {id: '1', name: A, email: a@x.edu, password_sha256: hunter2}\n";
    let err = Directory::from_yaml_str(yaml).unwrap_err();
    assert!(matches!(err, DirectoryError::InvalidDigest(ref id) if id == "1"));
}

#[test]
fn from_yaml_str_accepts_uppercase_digest() {
    let yaml = format!(
        "students:\n  - {{id: '1', name: A, email: a@x.edu, password_sha256: {}}}\n",
        PASSWORD_DIGEST.to_ascii_uppercase()
    );
    let dir = Directory::from_yaml_str(&yaml).unwrap();
    assert!(dir.authenticate("a@x.edu", "password").is_some());
}

#[test]
fn from_yaml_str_reports_malformed_yaml() {
    let err = Directory::from_yaml_str("students: {").unwrap_err();
    assert!(matches!(err, DirectoryError::Parse(_)));
}

#[test]
fn load_missing_file_reports_path() {
    let err = Directory::load(Path::new("/definitely/not/here.yaml")).unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.yaml"));
}

#[test]
fn load_bundled_fixture() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/directory.yaml");
    let dir = Directory::load(&path).unwrap();
    assert!(dir.authenticate("ada@example.edu", "analytical-engine").is_some());
    assert!(dir.authenticate("alan@example.edu", "bombe-1940").is_some());
}

// =============================================================================
// Authentication and lookups
// =============================================================================

#[test]
fn authenticate_accepts_correct_password_any_email_case() {
    let dir = Directory::from_yaml_str(&sample_yaml()).unwrap();
    let student = dir.authenticate("  ada@EXAMPLE.edu ", "password").unwrap();
    assert_eq!(student.id, "1");
}

#[test]
fn authenticate_rejects_wrong_password() {
    let dir = Directory::from_yaml_str(&sample_yaml()).unwrap();
    assert!(dir.authenticate("ada@example.edu", "Password").is_none());
}

#[test]
fn authenticate_rejects_unknown_email() {
    let dir = Directory::from_yaml_str(&sample_yaml()).unwrap();
    assert!(dir.authenticate("nobody@example.edu", "password").is_none());
}

#[test]
fn to_user_omits_credentials() {
    let dir = Directory::from_yaml_str(&sample_yaml()).unwrap();
    let user = dir.get("1").unwrap().to_user();
    assert_eq!(user.name, "Ada Lovelace");
    assert_eq!(user.program.as_deref(), Some("Mathematics"));
    let json = serde_json::to_string(&user).unwrap();
    assert!(!json.contains(PASSWORD_DIGEST));
}

#[test]
fn overview_sorts_announcements_newest_first() {
    let dir = Directory::from_yaml_str(&sample_yaml()).unwrap();
    let overview = dir.overview("1").unwrap();
    assert_eq!(overview.courses.len(), 1);
    let titles: Vec<_> = overview.announcements.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Newer", "Older"]);
}

#[test]
fn overview_unknown_student_is_none() {
    let dir = Directory::from_yaml_str(&sample_yaml()).unwrap();
    assert!(dir.overview("99").is_none());
}
