use std::io::{ErrorKind, Read, Write};

use tinta_core::ComicMetadata;
use tinta_core::ports::{MetadataError, MetadataFormat};

use crate::options::CixOptions;
use crate::{reader, writer};

/// Codec de ComicRack `ComicInfo.xml`.
///
/// Leer y escribir son funciones puras del texto / registro; el codec solo
/// guarda las opciones de escritura.
///
/// El round trip pierde, a propósito:
/// - la grafía original del rol (se colapsa al nombre de la categoría),
/// - el flag `primary` (el formato no lo tiene),
/// - la diferencia entre "sin asignar" y "vacío".
#[derive(Debug, Clone, Default)]
pub struct ComicInfoXml {
  options: CixOptions,
}

impl ComicInfoXml {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_options(options: CixOptions) -> Self {
    Self { options }
  }

  pub fn options(&self) -> &CixOptions {
    &self.options
  }

  pub fn metadata_from_str(&self, xml: &str) -> Result<ComicMetadata, MetadataError> {
    reader::metadata_from_str(xml)
  }

  pub fn read_from_reader<R: Read>(&self, mut input: R) -> Result<ComicMetadata, MetadataError> {
    let mut xml = String::new();
    input.read_to_string(&mut xml).map_err(|e| match e.kind() {
      ErrorKind::InvalidData => MetadataError::MalformedDocument(e.to_string()),
      _ => MetadataError::Io(e.to_string()),
    })?;
    self.metadata_from_str(xml.trim_start_matches('\u{feff}'))
  }

  pub fn string_from_metadata(&self, metadata: &ComicMetadata) -> Result<String, MetadataError> {
    writer::metadata_to_string(metadata, &self.options)
  }

  pub fn write_to_writer<W: Write>(&self, metadata: &ComicMetadata, out: W) -> Result<W, MetadataError> {
    writer::write_metadata(metadata, out, &self.options)
  }
}

impl MetadataFormat for ComicInfoXml {
  fn name(&self) -> &'static str {
    reader::TAG_ORIGIN
  }

  fn read_from_str(&self, text: &str) -> Result<ComicMetadata, MetadataError> {
    self.metadata_from_str(text)
  }

  fn write_to_string(&self, metadata: &ComicMetadata) -> Result<String, MetadataError> {
    self.string_from_metadata(metadata)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tinta_core::{Credit, Page, PageType};

  fn codec() -> ComicInfoXml {
    ComicInfoXml::new()
  }

  fn example() -> ComicMetadata {
    let mut md = ComicMetadata::new();
    md.is_empty = false;
    md.series = "Example".into();
    md.issue = "1".into();
    md.add_credit("Jane Doe", "Writer", true);

    let mut cover = Page::with_image(0);
    cover.set_page_type(PageType::FrontCover);
    let mut story = Page::with_image(1);
    story.set_page_type(PageType::Story);
    md.pages = vec![cover, story];
    md
  }

  #[test]
  fn round_trip_keeps_core_fields() {
    let xml = codec().string_from_metadata(&example()).unwrap();
    let back = codec().metadata_from_str(&xml).unwrap();

    assert!(!back.is_empty);
    assert_eq!(back.series, "Example");
    assert_eq!(back.issue, "1");
    // `primary` no se persiste
    assert_eq!(back.credits, vec![Credit::new("Jane Doe", "Writer", false)]);
    assert_eq!(back.pages.len(), 2);
    assert_eq!(back.pages[0].get("Image"), Some("0"));
    assert_eq!(back.pages[0].page_type(), Some(PageType::FrontCover));
    assert_eq!(back.pages[1].get("Image"), Some("1"));
    assert_eq!(back.pages[1].page_type(), Some(PageType::Story));
    assert_eq!(back.cover_page_index(), Ok(0));
  }

  #[test]
  fn output_is_deterministic_and_indented() {
    let md = example();
    let first = codec().string_from_metadata(&md).unwrap();
    let second = codec().string_from_metadata(&md).unwrap();
    assert_eq!(first, second);

    let expected = concat!(
      "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
      "<ComicInfo xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\">\n",
      "  <Series>Example</Series>\n",
      "  <Number>1</Number>\n",
      "  <Writer>Jane Doe</Writer>\n",
      "  <Pages>\n",
      "    <Page Image=\"0\" Type=\"FrontCover\"/>\n",
      "    <Page Image=\"1\" Type=\"Story\"/>\n",
      "  </Pages>\n",
      "</ComicInfo>\n",
    );
    assert_eq!(first, expected);
  }

  #[test]
  fn element_order_follows_schema() {
    let mut md = example();
    md.title = "Start".into();
    md.publisher = "Acme".into();
    md.year = "2019".into();
    md.manga = "No".into();
    md.black_and_white = Some(true);
    md.add_credit("Ed Itor", "Editor", false);

    let xml = codec().string_from_metadata(&md).unwrap();
    let order = ["<Title>", "<Series>", "<Number>", "<Year>", "<Writer>", "<Editor>", "<Publisher>", "<BlackAndWhite>", "<Manga>", "<Pages>"];
    let positions: Vec<usize> = order.iter().map(|tag| xml.find(tag).unwrap()).collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{xml}");
  }

  #[test]
  fn artist_fans_out_and_commas_are_stripped() {
    let mut md = ComicMetadata::new();
    md.add_credit("Sam Roe", "artist", false);
    md.add_credit("Smith, John", "Penciler", false);
    md.add_credit("Ana Ruiz", "Cover Artist", false);
    md.add_credit("Lou Ker", "Translator", false);

    let xml = codec().string_from_metadata(&md).unwrap();

    assert!(xml.contains("<Penciller>Sam Roe, Smith John</Penciller>"), "{xml}");
    assert!(xml.contains("<Inker>Sam Roe</Inker>"), "{xml}");
    assert!(xml.contains("<CoverArtist>Ana Ruiz</CoverArtist>"), "{xml}");
    assert!(!xml.contains("Lou Ker"));
  }

  #[test]
  fn cover_artist_is_imported_as_cover() {
    let md = codec()
      .metadata_from_str("<ComicInfo><CoverArtist>Ana Ruiz, Bo Li ,</CoverArtist><Inker>Sam Roe</Inker></ComicInfo>")
      .unwrap();

    assert_eq!(
      md.credits,
      vec![Credit::new("Ana Ruiz", "Cover", false), Credit::new("Bo Li", "Cover", false), Credit::new("Sam Roe", "Inker", false)]
    );

    // y vuelve a exportarse bajo CoverArtist
    let xml = codec().string_from_metadata(&md).unwrap();
    assert!(xml.contains("<CoverArtist>Ana Ruiz, Bo Li</CoverArtist>"));
  }

  #[test]
  fn black_and_white_round_trip() {
    let mut md = example();
    md.black_and_white = Some(true);
    let xml = codec().string_from_metadata(&md).unwrap();
    assert!(xml.contains("<BlackAndWhite>Yes</BlackAndWhite>"));
    assert_eq!(codec().metadata_from_str(&xml).unwrap().black_and_white, Some(true));

    md.black_and_white = Some(false);
    let xml = codec().string_from_metadata(&md).unwrap();
    assert!(!xml.contains("BlackAndWhite"));
    assert_eq!(codec().metadata_from_str(&xml).unwrap().black_and_white, Some(false));

    for (text, expected) in [("TRUE", true), ("1", true), ("no", false), ("", false)] {
      let xml = format!("<ComicInfo><BlackAndWhite>{text}</BlackAndWhite></ComicInfo>");
      assert_eq!(codec().metadata_from_str(&xml).unwrap().black_and_white, Some(expected), "{text:?}");
    }
  }

  #[test]
  fn missing_elements_read_as_empty_and_record_is_not_empty() {
    let md = codec().metadata_from_str("<ComicInfo/>").unwrap();

    assert!(!md.is_empty);
    assert_eq!(md.series, "");
    assert_eq!(md.year, "");
    assert!(md.credits.is_empty());
    assert!(md.pages.is_empty());
    assert_eq!(md.tag_origin, "ComicInfo");
  }

  #[test]
  fn wrong_root_is_malformed() {
    let err = codec().metadata_from_str("<comet><title>x</title></comet>").unwrap_err();
    assert!(matches!(err, MetadataError::MalformedDocument(_)));

    let err = codec().metadata_from_str("<ComicInfo><Series>x</Serie></ComicInfo>").unwrap_err();
    assert!(matches!(err, MetadataError::MalformedDocument(_)));
  }

  #[test]
  fn numbers_and_issues_are_normalized_on_read() {
    let md = codec()
      .metadata_from_str("<ComicInfo><Number>007</Number><Year> 2019 </Year><Month>03</Month><Count>v12</Count></ComicInfo>")
      .unwrap();

    assert_eq!(md.issue, "7");
    assert_eq!(md.year, "2019");
    assert_eq!(md.month, "3");
    assert_eq!(md.issue_count, "12");
  }

  #[test]
  fn issue_padding_from_options() {
    let codec = ComicInfoXml::with_options(CixOptions { issue_padding: 3, indent_width: 0 });
    let mut md = ComicMetadata::new();
    md.issue = "7".into();
    md.alternate_number = "2.5".into();

    let xml = codec.string_from_metadata(&md).unwrap();
    assert!(xml.contains("<Number>007</Number>"), "{xml}");
    assert!(xml.contains("<AlternateNumber>002.5</AlternateNumber>"), "{xml}");
    assert!(!xml.contains("\n  <"));
  }

  #[test]
  fn page_attributes_survive_verbatim() {
    let xml = r#"<ComicInfo><Pages><Page Image="2" DoublePage="True" Type="Centerfold" Key="a&amp;b"/></Pages></ComicInfo>"#;
    let md = codec().metadata_from_str(xml).unwrap();

    let pairs: Vec<(&str, &str)> = md.pages[0].iter().collect();
    assert_eq!(pairs, vec![("Image", "2"), ("DoublePage", "True"), ("Type", "Centerfold"), ("Key", "a&b")]);

    let written = codec().string_from_metadata(&md).unwrap();
    assert!(written.contains(r#"<Page Image="2" DoublePage="True" Type="Centerfold" Key="a&amp;b"/>"#), "{written}");
  }

  #[test]
  fn special_characters_are_escaped() {
    let mut md = ComicMetadata::new();
    md.title = "Tom & Jerry <3".into();

    let xml = codec().string_from_metadata(&md).unwrap();
    assert!(xml.contains("<Title>Tom &amp; Jerry &lt;3</Title>"), "{xml}");
    assert_eq!(codec().metadata_from_str(&xml).unwrap().title, "Tom & Jerry <3");
  }

  #[test]
  fn reader_accepts_bom_and_works_through_the_port() {
    let port: &dyn MetadataFormat = &ComicInfoXml::new();
    let md = ComicInfoXml::new()
      .read_from_reader("\u{feff}<?xml version=\"1.0\"?><ComicInfo><Series>S</Series></ComicInfo>".as_bytes())
      .unwrap();
    assert_eq!(md.series, "S");

    let xml = port.write_to_string(&md).unwrap();
    assert_eq!(port.read_from_str(&xml).unwrap().series, "S");
    assert_eq!(port.name(), "ComicInfo");
  }

  #[test]
  fn write_to_writer_matches_string_output() {
    let md = example();
    let bytes = codec().write_to_writer(&md, Vec::new()).unwrap();
    assert_eq!(String::from_utf8(bytes).unwrap(), codec().string_from_metadata(&md).unwrap());
  }

  #[test]
  fn page_keys_that_are_not_xml_names_are_rejected() {
    let mut md = example();
    md.pages = vec![[("Image", "0"), ("Double Page", "True")].into_iter().collect()];

    let err = codec().string_from_metadata(&md).unwrap_err();
    assert!(matches!(err, MetadataError::Internal(_)), "{err:?}");

    md.pages = vec![[("Image", "0"), ("", "x")].into_iter().collect()];
    assert!(codec().string_from_metadata(&md).is_err());
  }

  #[test]
  fn invalid_utf8_stream_is_malformed() {
    let bytes: &[u8] = b"<ComicInfo><Series>\xff</Series></ComicInfo>";
    let err = codec().read_from_reader(bytes).unwrap_err();
    assert!(matches!(err, MetadataError::MalformedDocument(_)), "{err:?}");
  }

  #[test]
  fn whitespace_between_text_pieces_is_kept() {
    let md = codec().metadata_from_str("<ComicInfo><Series>Tom <!-- x --> Jerry</Series></ComicInfo>").unwrap();
    assert_eq!(md.series, "Tom  Jerry");

    let md = codec().metadata_from_str("<ComicInfo>\n  <Title>\n    Padded  \n  </Title>\n</ComicInfo>").unwrap();
    assert_eq!(md.title, "Padded");
  }
}
