//! Files copied into a project by `install`

/// `resources/views/layouts/app.blade.php`
pub const APP_LAYOUT: &str = r##"<!doctype html>
<html lang="{{ app()->getLocale() }}" dir="{{ app()->isLocale('ar') ? 'rtl' : 'ltr' }}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">

    <title>{{ config('app.name', 'Laravel') }}</title>

    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/7.0.1/css/all.min.css">
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css" rel="stylesheet">

    @stack('styles')
</head>
<body>
    @include('layouts.navigation')

    <main class="py-4">
        @yield('content')
    </main>

    <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/js/bootstrap.bundle.min.js"></script>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/7.0.1/js/all.min.js"></script>

    @stack('scripts')
</body>
</html>
"##;

/// `resources/views/layouts/navigation.blade.php`
///
/// Builds a CRUD dropdown from `config('crud-pack.resources')`. Counts come
/// from the `totalCount` / `trashedTotal` view data generated controllers
/// pass for the current resource.
pub const NAVIGATION: &str = r##"<nav class="navbar navbar-expand-lg navbar-light bg-light border-bottom">
    <div class="container">
        <a class="navbar-brand" href="{{ url('/') }}">
            {{ config('app.name', 'Laravel') }}
        </a>

        <button class="navbar-toggler" type="button"
                data-bs-toggle="collapse"
                data-bs-target="#navbarSupportedContent"
                aria-controls="navbarSupportedContent"
                aria-expanded="false"
                aria-label="Toggle navigation">
            <span class="navbar-toggler-icon"></span>
        </button>

        <div class="collapse navbar-collapse" id="navbarSupportedContent">
            <ul class="navbar-nav me-auto">
                <li class="nav-item">
                    <a class="nav-link" href="{{ url('/') }}">Home</a>
                </li>

                @php
                    $crudResources = config('crud-pack.resources', []);

                    $currentRoute = \Illuminate\Support\Facades\Route::currentRouteName();
                    $currentBase  = $currentRoute ? explode('.', $currentRoute)[0] : null;

                    $listCount  = (int) ($totalCount ?? 0);
                    $trashCount = (int) ($trashedTotal ?? 0);
                @endphp

                @if(!empty($crudResources))
                    <li class="nav-item dropdown">
                        <a class="nav-link dropdown-toggle" href="#" id="crudDropdown" role="button"
                           data-bs-toggle="dropdown" aria-expanded="false">
                            CRUD
                        </a>

                        <ul class="dropdown-menu" aria-labelledby="crudDropdown">
                            @foreach($crudResources as $res)
                                @php
                                    $label = $res['label'] ?? 'Resource';
                                    $base  = $res['route'] ?? null;
                                    $soft  = (bool) ($res['soft_deletes'] ?? false);
                                    $trash = $res['trash_route'] ?? ($base . '.trash');

                                    $isCurrent = $base && $currentBase && ($base === $currentBase);
                                @endphp

                                @continue(!$base)

                                <li><h6 class="dropdown-header">{{ $label }}</h6></li>

                                <li>
                                    <a class="dropdown-item" href="{{ route($base . '.index') }}">
                                        List
                                        @if($isCurrent)
                                            <span class="text-muted">({{ $listCount }})</span>
                                        @endif
                                    </a>
                                </li>

                                <li>
                                    <a class="dropdown-item" href="{{ route($base . '.create') }}">Create</a>
                                </li>

                                @if($soft)
                                    <li>
                                        <a class="dropdown-item text-danger" href="{{ route($trash) }}">
                                            Trash
                                            @if($isCurrent)
                                                <span class="text-muted">({{ $trashCount }})</span>
                                            @endif
                                        </a>
                                    </li>
                                @endif

                                @if(!$loop->last)
                                    <li><hr class="dropdown-divider"></li>
                                @endif
                            @endforeach
                        </ul>
                    </li>
                @endif
            </ul>

            <ul class="navbar-nav ms-auto">
                @auth
                    <li class="nav-item dropdown">
                        <a id="navbarUserDropdown" class="nav-link dropdown-toggle" href="#" role="button"
                           data-bs-toggle="dropdown" aria-expanded="false">
                            {{ Auth::user()->name ?? Auth::user()->email }}
                        </a>

                        <ul class="dropdown-menu dropdown-menu-end" aria-labelledby="navbarUserDropdown">
                            @if (Route::has('logout'))
                                <li>
                                    <form method="POST" action="{{ route('logout') }}">
                                        @csrf
                                        <button type="submit" class="dropdown-item">Logout</button>
                                    </form>
                                </li>
                            @endif
                        </ul>
                    </li>
                @endauth
            </ul>
        </div>
    </div>
</nav>
"##;

/// `resources/views/welcome.blade.php`
pub const WELCOME: &str = r##"@extends('layouts.app')

@section('content')
<div class="container">
    <div class="card">
        <div class="card-body">
            <h1 class="card-title">Welcome</h1>
            <p class="card-text">
                Laravel v{{ app()->version() }} with Bootstrap 5 and Font Awesome 7.0.1
            </p>
        </div>
    </div>
</div>
@endsection
"##;

/// `config/crud-pack.php`
///
/// Ships with example entries commented out so a fresh install renders no
/// links to routes that do not exist yet.
pub const NAV_CONFIG: &str = r##"<?php

return [

    /*
    |--------------------------------------------------------------------------
    | CRUD Resources (navigation dropdown)
    |--------------------------------------------------------------------------
    | Each item:
    | - label: text shown in the dropdown
    | - route: base resource route name (products => products.index)
    | - soft_deletes: shows a Trash link when true
    | - trash_route: optional, defaults to "<route>.trash"
    |
    | `crud-pack make` prints the entry for every web resource it generates.
    */

    'resources' => [
        // [
        //     'label' => 'Products',
        //     'route' => 'products',
        //     'soft_deletes' => true,
        // ],
    ],
];
"##;
