use crate::view::FlagView;

/// One menu section: the rows sharing a grouping tag.
#[derive(Debug)]
pub struct FlagSection {
    pub group: Option<String>,
    pub entries: Vec<FlagView>,
}

/// Buckets rendered views by their grouping tag. Sections appear in order
/// of first appearance and rows keep their relative order within a
/// section.
pub fn sections(views: Vec<FlagView>) -> Vec<FlagSection> {
    let mut sections: Vec<FlagSection> = Vec::new();

    for view in views {
        match sections
            .iter_mut()
            .find(|section| section.group == view.group)
        {
            Some(section) => section.entries.push(view),
            None => sections.push(FlagSection {
                group: view.group.clone(),
                entries: vec![view],
            }),
        }
    }

    sections
}
