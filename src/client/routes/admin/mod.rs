mod match_approval;

pub use match_approval::AdminMatchApproval;
