use jsonvalue::json::Result;

use crate::cmd::InputArgs;
use crate::cmd::util::select;

/// Print the kind at the selected path; missing paths print `null (missing)`.
pub fn run(input: &InputArgs) -> Result<()> {
	let selection = select(input)?;
	if selection.value.is_absent() {
		println!("{} (missing)", selection.value.kind());
	} else {
		println!("{}", selection.value.kind());
	}
	Ok(())
}
