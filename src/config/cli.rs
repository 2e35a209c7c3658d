use crate::core::client::RequestOptions;
use crate::domain::model::{
    InternshipStatus, InternshipUpdate, NewInternship, NewOffer, NewReport, NewStudent,
    OfferStatus, OfferUpdate, ReportUpdate, StudentUpdate,
};
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::validate_non_empty_string;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use reqwest::Method;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Load the student list and the dashboard summary
    Start,
    /// Show the dashboard summary
    Dashboard,
    #[command(subcommand)]
    Students(StudentCommand),
    #[command(subcommand)]
    Offers(OfferCommand),
    #[command(subcommand)]
    Internships(InternshipCommand),
    #[command(subcommand)]
    Reports(ReportCommand),
    /// Send a raw request and print the decoded response
    Request(RawRequestArgs),
}

#[derive(Debug, Clone, Subcommand)]
pub enum StudentCommand {
    List,
    Show {
        id: i64,
    },
    Add(StudentArgs),
    Update {
        id: i64,
        #[command(flatten)]
        fields: StudentUpdateArgs,
    },
    /// Delete a student together with its offers and internships
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum OfferCommand {
    List,
    Add(OfferArgs),
    Update {
        id: i64,
        #[command(flatten)]
        fields: OfferUpdateArgs,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum InternshipCommand {
    List,
    Add(InternshipArgs),
    Update {
        id: i64,
        #[command(flatten)]
        fields: InternshipUpdateArgs,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ReportCommand {
    Add(ReportArgs),
    Update {
        id: i64,
        #[command(flatten)]
        fields: ReportUpdateArgs,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Clone, Args)]
pub struct StudentArgs {
    #[arg(long)]
    pub roll_no: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub dept: Option<String>,
    #[arg(long)]
    pub year: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

impl From<StudentArgs> for NewStudent {
    fn from(args: StudentArgs) -> Self {
        NewStudent {
            roll_no: args.roll_no,
            name: args.name,
            dept: args.dept,
            year: args.year,
            email: args.email,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct StudentUpdateArgs {
    #[arg(long)]
    pub roll_no: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub dept: Option<String>,
    #[arg(long)]
    pub year: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

impl From<StudentUpdateArgs> for StudentUpdate {
    fn from(args: StudentUpdateArgs) -> Self {
        StudentUpdate {
            roll_no: args.roll_no,
            name: args.name,
            dept: args.dept,
            year: args.year,
            email: args.email,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct OfferArgs {
    #[arg(long)]
    pub student_id: i64,
    #[arg(long)]
    pub company: String,
    #[arg(long)]
    pub role: String,
    #[arg(long)]
    pub ctc: Option<String>,
    /// Offer date (YYYY-MM-DD); the server uses today when omitted
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long, default_value = "Offered")]
    pub status: OfferStatus,
}

impl From<OfferArgs> for NewOffer {
    fn from(args: OfferArgs) -> Self {
        NewOffer {
            student_id: args.student_id,
            company: args.company,
            role: args.role,
            ctc: args.ctc,
            date: args.date,
            status: args.status,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct OfferUpdateArgs {
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub ctc: Option<String>,
    #[arg(long)]
    pub status: Option<OfferStatus>,
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

impl From<OfferUpdateArgs> for OfferUpdate {
    fn from(args: OfferUpdateArgs) -> Self {
        OfferUpdate {
            company: args.company,
            role: args.role,
            ctc: args.ctc,
            status: args.status,
            date: args.date,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct InternshipArgs {
    #[arg(long)]
    pub student_id: i64,
    #[arg(long)]
    pub company: String,
    #[arg(long)]
    pub role: String,
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
    #[arg(long)]
    pub end_date: Option<NaiveDate>,
    #[arg(long, default_value = "Ongoing")]
    pub status: InternshipStatus,
}

impl From<InternshipArgs> for NewInternship {
    fn from(args: InternshipArgs) -> Self {
        NewInternship {
            student_id: args.student_id,
            company: args.company,
            role: args.role,
            start_date: args.start_date,
            end_date: args.end_date,
            status: args.status,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct InternshipUpdateArgs {
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
    #[arg(long)]
    pub end_date: Option<NaiveDate>,
    #[arg(long)]
    pub status: Option<InternshipStatus>,
}

impl From<InternshipUpdateArgs> for InternshipUpdate {
    fn from(args: InternshipUpdateArgs) -> Self {
        InternshipUpdate {
            company: args.company,
            role: args.role,
            start_date: args.start_date,
            end_date: args.end_date,
            status: args.status,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ReportArgs {
    #[arg(long)]
    pub internship_id: i64,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long)]
    pub evaluation: Option<String>,
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

impl From<ReportArgs> for NewReport {
    fn from(args: ReportArgs) -> Self {
        NewReport {
            internship_id: args.internship_id,
            title: args.title,
            content: args.content,
            evaluation: args.evaluation,
            date: args.date,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ReportUpdateArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long)]
    pub evaluation: Option<String>,
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

impl From<ReportUpdateArgs> for ReportUpdate {
    fn from(args: ReportUpdateArgs) -> Self {
        ReportUpdate {
            title: args.title,
            content: args.content,
            evaluation: args.evaluation,
            date: args.date,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct RawRequestArgs {
    /// HTTP method, e.g. GET or DELETE
    pub method: String,
    /// Path relative to the base URL, e.g. /students/1
    pub path: String,
    /// Raw JSON body
    #[arg(long)]
    pub body: Option<String>,
    /// Extra header, repeatable
    #[arg(long = "header", value_name = "NAME:VALUE")]
    pub headers: Vec<String>,
}

impl RawRequestArgs {
    pub fn to_options(&self) -> Result<RequestOptions> {
        validate_non_empty_string("request.path", &self.path)?;

        let method = Method::from_bytes(self.method.to_ascii_uppercase().as_bytes()).map_err(
            |e| ClientError::InvalidRequestError {
                message: format!("Invalid HTTP method '{}': {}", self.method, e),
            },
        )?;

        let mut options = RequestOptions::new().method(method);

        if let Some(body) = &self.body {
            options = options.body(body.clone());
        }

        for header in &self.headers {
            let (name, value) =
                header
                    .split_once(':')
                    .ok_or_else(|| ClientError::InvalidRequestError {
                        message: format!("Header '{}' must look like NAME:VALUE", header),
                    })?;
            options = options.header(name.trim(), value.trim());
        }

        Ok(options)
    }
}
