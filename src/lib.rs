pub mod configuration;

pub mod time {
    pub mod utility;
    pub mod holiday;
    pub mod businessdayfinder;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod equinoxholiday;
        pub mod citizensholiday;
    }

    pub mod calendar {
        pub mod holidayset;
        pub mod holidaycalendar;
        pub mod japanesecalendar;
        pub mod precomputedcalendar;
    }
}
