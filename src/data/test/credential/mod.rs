use crate::data::credential::CredentialRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
