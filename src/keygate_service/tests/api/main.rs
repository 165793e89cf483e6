mod helpers;
mod login;
mod logout;
mod registration;
