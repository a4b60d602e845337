//! Basic usage example for autorev-content

use autorev_content::{Document, RevisionGenerator, Stamp};

fn main() -> autorev_content::Result<()> {
    let source = r#"# encoding: UTF-8
#
# REVISION HISTORY
#   REV.00 2024/01/10  BY. AB
#
class Greeter
end
"#;

    let mut doc = Document::new(source);
    let generator = RevisionGenerator::for_language("ruby")?;
    println!("Style: {:?}", generator.style());
    println!("Next revision: {}", generator.next_number(&doc)?);

    let stamp = Stamp::today("CD", "add greeting");
    let edit = generator.stamp(&mut doc, &stamp)?;
    println!("Inserted at {}: {:?}", edit.point, edit.kind);
    println!("{}", doc.text());

    Ok(())
}
